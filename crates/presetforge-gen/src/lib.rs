//! PresetForge Generation Backend
//!
//! This crate implements the preset synthesis and packaging pipeline:
//!
//! - **Style ranges** - per-style numeric domains biasing the major
//!   perceptual axes (polyphony, oscillator level, filter cutoff, envelope)
//! - **Sub-structure generators** - modulation routings, LFO shapes,
//!   keyframed wavetables
//! - **Assembler** - composes the above into one schema-complete
//!   [`presetforge_preset::Preset`] document
//! - **Writer** - serializes documents to uniquely named `.vital` files
//! - **Bank packager** - folds a batch of presets into one timestamped
//!   `.vitalbank` archive
//!
//! # Determinism
//!
//! All randomness flows through PCG32 generators handed down explicitly.
//! Per-preset seeds are derived from the request's base seed via BLAKE3
//! hashing, so a seeded run reproduces every document byte for byte.
//!
//! # Example
//!
//! ```ignore
//! use presetforge_gen::{generate, GenerateRequest};
//!
//! let request = GenerateRequest {
//!     style: "Bass".to_string(),
//!     count: 5,
//!     seed: Some(42),
//!     ..GenerateRequest::default()
//! };
//! let outcome = generate(&request)?;
//! println!("wrote {} presets", outcome.paths.len());
//! ```

pub mod assemble;
pub mod bank;
pub mod error;
pub mod generate;
pub mod lfo;
pub mod modulation;
pub mod ranges;
pub mod request;
pub mod rng;
pub mod wavetable;
pub mod writer;

// Re-export main types at crate root
pub use assemble::{assemble, AssembleParams, RANDOM_STYLE};
pub use bank::{pack_bank, BankOutcome};
pub use error::{GenError, GenResult};
pub use generate::{generate, GenerateOutcome};
pub use modulation::RoutingPool;
pub use ranges::{ranges_for, StyleRanges, DEFAULT_STYLE, STYLES};
pub use request::GenerateRequest;

//! PresetForge Preset Model
//!
//! Canonical document model for randomized synthesizer presets:
//!
//! - [`Preset`] - one complete preset document, serialized as indented JSON
//!   with the `.vital` extension
//! - [`Settings`] - the flat parameter block plus the three fixed-count
//!   nested collections (8 LFO shapes, 64 modulation routings, 3 wavetables)
//! - [`sanitize`] - in-place scrubbing of embedded sample/wave payloads from
//!   existing preset files on disk
//!
//! # Schema completeness
//!
//! The target synthesizer's loader expects every key to be present, even when
//! a value is semantically empty. The model therefore carries placeholder
//! fields (an empty [`Sample`], empty `wave_data` strings) rather than
//! omitting them, and serialization round-trips structurally unchanged.

pub mod document;
pub mod error;
pub mod sanitize;

// Re-export main types at crate root
pub use document::{
    Keyframe, LfoShape, Modulation, Preset, Sample, Settings, Wavetable, WavetableComponent,
    WavetableGroup, BANK_EXTENSION, LFO_COUNT, MODULATION_COUNT, PRESET_EXTENSION, SAMPLE_RATE,
    SYNTH_VERSION, WAVETABLE_COUNT,
};
pub use error::{PresetError, PresetResult};
pub use sanitize::{sanitize_file, sanitize_value};

//! Preset document types.
//!
//! The document mirrors the target synthesizer's file format exactly: a small
//! header (author, comments, macro names, style, version) and a `settings`
//! block holding a flat map of numeric parameters next to three fixed-count
//! nested collections. Boolean parameters are stored as `0.0`/`1.0` floats and
//! conceptually integral parameters (polyphony, transpose) as whole-valued
//! floats, because that is what the loader expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PresetResult;

/// Synthesizer version tag written into every document.
pub const SYNTH_VERSION: &str = "1.5.5";

/// File extension for a single preset document.
pub const PRESET_EXTENSION: &str = "vital";

/// File extension for a packaged preset bank archive.
pub const BANK_EXTENSION: &str = "vitalbank";

/// Number of LFO shapes per document. Fixed by the target format.
pub const LFO_COUNT: usize = 8;

/// Number of modulation routing slots per document. Fixed by the target format.
pub const MODULATION_COUNT: usize = 64;

/// Number of wavetables per document. Fixed by the target format.
pub const WAVETABLE_COUNT: usize = 3;

/// Sample rate written into sample and wavetable metadata.
pub const SAMPLE_RATE: u32 = 44100;

/// Highest keyframe position on the wavetable frame axis.
pub const KEYFRAME_POSITION_MAX: u32 = 256;

/// Window sizes the target format accepts for wavetable keyframes.
pub const ALLOWED_WINDOW_SIZES: [f64; 2] = [1024.0, 4096.0];

/// A complete preset document.
///
/// Owned by the assembler, never mutated after construction, written once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub author: String,
    pub comments: String,
    pub macro1: String,
    pub macro2: String,
    pub macro3: String,
    pub macro4: String,
    pub preset_style: String,
    pub synth_version: String,
    pub settings: Settings,
}

impl Preset {
    /// Parses a preset document from JSON.
    pub fn from_json(json: &str) -> PresetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the document as indented JSON, the on-disk format.
    pub fn to_json_pretty(&self) -> PresetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The settings block: a flat parameter map plus the fixed-count collections.
///
/// Every numeric/boolean parameter lives in `params` and is flattened to the
/// top level of the block on serialization, alongside the named collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub lfos: Vec<LfoShape>,
    pub modulations: Vec<Modulation>,
    pub sample: Sample,
    pub wavetables: Vec<Wavetable>,
    #[serde(flatten)]
    pub params: BTreeMap<String, f64>,
}

/// A low-frequency oscillator shape: a parametric curve over a monotonic
/// 0..1 time axis.
///
/// `points` interleaves (x, y) pairs, so `points.len() == 2 * num_points` and
/// `powers.len() == num_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LfoShape {
    pub name: String,
    pub num_points: u32,
    pub points: Vec<f64>,
    pub powers: Vec<f64>,
    pub smooth: bool,
}

/// One modulation routing slot: a source driving a destination parameter.
///
/// A routing is binary: either both fields are populated or both are empty
/// strings (an unused slot). One without the other never occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modulation {
    pub destination: String,
    pub source: String,
}

impl Modulation {
    /// The unused-slot routing.
    pub fn empty() -> Self {
        Self {
            destination: String::new(),
            source: String::new(),
        }
    }

    /// Returns true if this slot is unused.
    pub fn is_empty(&self) -> bool {
        self.destination.is_empty() && self.source.is_empty()
    }
}

/// Embedded sample payload. Generated presets carry the empty placeholder;
/// the loader requires the key to exist regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub length: u32,
    pub name: String,
    pub sample_rate: u32,
    pub samples: String,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            length: 0,
            name: String::new(),
            sample_rate: SAMPLE_RATE,
            samples: String::new(),
        }
    }
}

/// A wavetable: one group holding one audio-file-source component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wavetable {
    pub author: String,
    pub full_normalize: bool,
    pub groups: Vec<WavetableGroup>,
    pub name: String,
    pub remove_all_dc: bool,
    pub version: String,
}

/// A wavetable component group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavetableGroup {
    pub components: Vec<WavetableComponent>,
}

/// An "Audio File Source" wavetable component: keyframes over an embedded
/// audio payload plus fixed synthesis metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavetableComponent {
    pub audio_file: String,
    pub audio_sample_rate: u32,
    pub fade_style: u32,
    pub interpolation_style: u32,
    pub keyframes: Vec<Keyframe>,
    pub normalize_gain: bool,
    pub normalize_mult: bool,
    pub phase_style: u32,
    pub random_seed: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub window_size: f64,
}

/// One wavetable keyframe. Created in ascending-position batches, never
/// individually mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: u32,
    pub start_position: f64,
    pub window_fade: f64,
    pub window_size: f64,
    pub wave_data: String,
}

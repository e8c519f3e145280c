//! Preset assembler.
//!
//! Composes the style range table and the sub-structure generators into one
//! complete, schema-conformant preset document. The settings builder inserts
//! every flat key the target loader expects; indexed parameter families
//! (oscillators, envelopes, modulation slots) are written with explicit
//! loops over their index ranges.

use std::collections::BTreeMap;

use rand_pcg::Pcg32;

use presetforge_preset::{
    Preset, Sample, Settings, SYNTH_VERSION, LFO_COUNT, MODULATION_COUNT, WAVETABLE_COUNT,
};

use crate::lfo::random_lfo;
use crate::modulation::RoutingPool;
use crate::ranges::{ranges_for, STYLES};
use crate::request::GenerateRequest;
use crate::rng::{random_bool, random_float, random_int, random_name};
use crate::wavetable::random_wavetable;

/// Style name that resolves to a uniformly chosen concrete style.
pub const RANDOM_STYLE: &str = "Random";

/// Author tag written into every generated document.
pub const AUTHOR: &str = "RandomPresetGenerator";

const COMMENTS: &str = "Randomly generated preset";

/// The `volume` field is always written as this constant. The generation
/// request accepts a volume range, but it is not applied; see DESIGN.md for
/// the rationale.
pub const FIXED_VOLUME: f64 = 8000.0;

/// Caller-supplied numeric domains for one assembly.
#[derive(Debug, Clone, Copy)]
pub struct AssembleParams {
    pub polyphony_range: (i64, i64),
    pub empty_mod_chance: f64,
    pub mod_amount_range: (f64, f64),
    pub mod_power_range: (f64, f64),
}

impl From<&GenerateRequest> for AssembleParams {
    fn from(request: &GenerateRequest) -> Self {
        Self {
            polyphony_range: request.polyphony_range,
            empty_mod_chance: request.empty_mod_chance,
            mod_amount_range: request.mod_amount_range,
            mod_power_range: request.mod_power_range,
        }
    }
}

/// Resolves `"Random"` to a concrete style; anything else passes through.
///
/// The resolved style is recorded in the document and drives every
/// range-dependent field of that document - it is chosen exactly once.
pub fn resolve_style(rng: &mut Pcg32, style: &str) -> String {
    if style == RANDOM_STYLE {
        STYLES[random_int(rng, 0, STYLES.len() as i64 - 1) as usize].to_string()
    } else {
        style.to_string()
    }
}

/// Assembles one complete preset document.
///
/// Every flat key of the schema is populated; the three nested collections
/// are generated at their fixed counts. Range arguments are used as given:
/// reversed bounds (min > max) propagate to the uniform draws.
pub fn assemble(
    rng: &mut Pcg32,
    style: &str,
    params: &AssembleParams,
    pool: &RoutingPool,
) -> Preset {
    let resolved = resolve_style(rng, style);
    let ranges = ranges_for(&resolved);

    let mut p = BTreeMap::new();

    // Global settings
    p.insert("volume".to_string(), FIXED_VOLUME);
    p.insert(
        "polyphony".to_string(),
        random_int(rng, params.polyphony_range.0, params.polyphony_range.1) as f64,
    );
    p.insert("oversampling".to_string(), 0.0);
    p.insert("beats_per_minute".to_string(), 2.0);
    p.insert("bypass".to_string(), 0.0);

    // Voice settings
    p.insert("voice_amplitude".to_string(), 1.0);
    p.insert("voice_override".to_string(), random_bool(rng));
    p.insert("voice_priority".to_string(), random_int(rng, 0, 8) as f64);
    p.insert(
        "voice_transpose".to_string(),
        random_int(rng, -24, 24) as f64,
    );
    p.insert("voice_tune".to_string(), random_float(rng, -1.0, 1.0));

    // Effect on/off states
    for effect in [
        "chorus",
        "compressor",
        "delay",
        "distortion",
        "eq",
        "flanger",
        "phaser",
        "reverb",
        "sample",
    ] {
        p.insert(format!("{effect}_on"), random_bool(rng));
    }

    // Filter on/off states
    for filter in ["1", "2", "fx"] {
        p.insert(format!("filter_{filter}_on"), random_bool(rng));
    }

    // Oscillator settings: level follows the style; the rest use fixed
    // global domains independent of style.
    for i in 1..=3 {
        p.insert(format!("osc_{i}_on"), random_bool(rng));
        p.insert(
            format!("osc_{i}_level"),
            random_float(rng, ranges.osc_level.0, ranges.osc_level.1),
        );
        p.insert(
            format!("osc_{i}_transpose"),
            random_int(rng, -24, 24) as f64,
        );
        p.insert(format!("osc_{i}_tune"), random_float(rng, -1.0, 1.0));
        p.insert(
            format!("osc_{i}_unison_voices"),
            random_int(rng, 1, 8) as f64,
        );
        p.insert(
            format!("osc_{i}_unison_detune"),
            random_float(rng, 2.0, 5.0),
        );
        p.insert(
            format!("osc_{i}_unison_blend"),
            random_float(rng, 0.5, 1.0),
        );
        p.insert(
            format!("osc_{i}_stereo_spread"),
            random_float(rng, 0.0, 1.0),
        );
        p.insert(format!("osc_{i}_random_phase"), random_bool(rng));
        p.insert(format!("osc_{i}_phase"), random_float(rng, 0.0, 1.0));
        p.insert(format!("osc_{i}_midi_track"), 1.0);
        p.insert(
            format!("osc_{i}_distortion_type"),
            random_int(rng, 0, 12) as f64,
        );
        p.insert(
            format!("osc_{i}_spectral_morph_type"),
            random_int(rng, 0, 15) as f64,
        );
        p.insert(format!("osc_{i}_frame_spread"), 0.0);
        p.insert(
            format!("osc_{i}_spectral_morph_amount"),
            random_float(rng, 0.0, 1.0),
        );
        p.insert(
            format!("osc_{i}_spectral_morph_phase"),
            random_float(rng, 0.0, 1.0),
        );
        p.insert(
            format!("osc_{i}_spectral_morph_spread"),
            random_float(rng, 0.0, 1.0),
        );
    }

    // Filter settings: cutoff follows the style.
    p.insert(
        "filter_1_cutoff".to_string(),
        random_float(rng, ranges.filter_cutoff.0, ranges.filter_cutoff.1),
    );
    p.insert(
        "filter_1_resonance".to_string(),
        random_float(rng, 0.0, 1.0),
    );
    p.insert("filter_1_blend".to_string(), random_float(rng, 0.0, 1.0));
    p.insert("filter_1_style".to_string(), random_int(rng, 0, 3) as f64);
    p.insert("filter_1_model".to_string(), random_int(rng, 0, 8) as f64);
    p.insert("filter_1_drive".to_string(), random_float(rng, 0.0, 1.0));
    p.insert("filter_1_mix".to_string(), random_float(rng, 0.0, 1.0));

    // Envelope settings: ADSR follows the style, curve powers are global.
    for i in 1..=6 {
        p.insert(
            format!("env_{i}_attack"),
            random_float(rng, ranges.env_attack.0, ranges.env_attack.1),
        );
        p.insert(
            format!("env_{i}_decay"),
            random_float(rng, ranges.env_decay.0, ranges.env_decay.1),
        );
        p.insert(
            format!("env_{i}_sustain"),
            random_float(rng, ranges.env_sustain.0, ranges.env_sustain.1),
        );
        p.insert(
            format!("env_{i}_release"),
            random_float(rng, ranges.env_release.0, ranges.env_release.1),
        );
        p.insert(
            format!("env_{i}_attack_power"),
            random_float(rng, -4.0, 4.0),
        );
        p.insert(format!("env_{i}_decay_power"), random_float(rng, -4.0, 4.0));
        p.insert(
            format!("env_{i}_release_power"),
            random_float(rng, -4.0, 4.0),
        );
    }

    // Reverb
    p.insert(
        "reverb_decay_time".to_string(),
        random_float(rng, -5.0, 5.0),
    );
    p.insert("reverb_dry_wet".to_string(), random_float(rng, 0.0, 1.0));
    p.insert("reverb_size".to_string(), random_float(rng, 0.0, 1.0));
    p.insert(
        "reverb_high_shelf_cutoff".to_string(),
        random_float(rng, 20.0, 120.0),
    );
    p.insert(
        "reverb_low_shelf_cutoff".to_string(),
        random_float(rng, 0.0, 100.0),
    );

    // Delay
    p.insert("delay_feedback".to_string(), random_float(rng, 0.0, 0.95));
    p.insert("delay_dry_wet".to_string(), random_float(rng, 0.0, 1.0));
    p.insert("delay_tempo".to_string(), random_int(rng, 2, 16) as f64);

    // Performance settings
    p.insert("stereo_mode".to_string(), random_bool(rng));
    p.insert(
        "pitch_bend_range".to_string(),
        random_int(rng, 1, 24) as f64,
    );
    p.insert("velocity_track".to_string(), random_float(rng, 0.0, 1.0));
    p.insert("portamento_time".to_string(), random_float(rng, -10.0, 0.0));
    p.insert("legato".to_string(), random_bool(rng));

    // Macro controls
    for i in 1..=4 {
        p.insert(
            format!("macro_control_{i}"),
            random_float(rng, 0.0, 1.0),
        );
    }

    // Modulation slot quintets: amount and power follow the caller's ranges.
    for i in 1..=MODULATION_COUNT {
        p.insert(
            format!("modulation_{i}_amount"),
            random_float(rng, params.mod_amount_range.0, params.mod_amount_range.1),
        );
        p.insert(format!("modulation_{i}_bipolar"), random_bool(rng));
        p.insert(format!("modulation_{i}_bypass"), random_bool(rng));
        p.insert(
            format!("modulation_{i}_power"),
            random_float(rng, params.mod_power_range.0, params.mod_power_range.1),
        );
        p.insert(format!("modulation_{i}_stereo"), random_bool(rng));
    }

    let settings = Settings {
        lfos: (0..LFO_COUNT).map(|_| random_lfo(rng)).collect(),
        modulations: (0..MODULATION_COUNT)
            .map(|_| pool.draw(rng, params.empty_mod_chance))
            .collect(),
        sample: Sample::default(),
        wavetables: (0..WAVETABLE_COUNT).map(|_| random_wavetable(rng)).collect(),
        params: p,
    };

    Preset {
        author: AUTHOR.to_string(),
        comments: COMMENTS.to_string(),
        macro1: random_name(rng, 8),
        macro2: random_name(rng, 8),
        macro3: random_name(rng, 8),
        macro4: random_name(rng, 8),
        preset_style: resolved,
        synth_version: SYNTH_VERSION.to_string(),
        settings,
    }
}

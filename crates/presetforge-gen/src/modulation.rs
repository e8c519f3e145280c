//! Modulation routing generator.
//!
//! Routings are drawn from two fixed enumerations: 26 sources (envelopes,
//! LFOs, macros, performance controls) and several hundred destination
//! parameters spanning oscillators, filters, effects, and modulation-amount
//! slots. The pool is built once per run; draws are independent and
//! duplicates are permitted.

use rand::seq::SliceRandom;
use rand::Rng;

use presetforge_preset::Modulation;

/// The fixed source and destination enumerations for routing draws.
#[derive(Debug, Clone)]
pub struct RoutingPool {
    sources: Vec<String>,
    destinations: Vec<String>,
}

impl RoutingPool {
    /// Builds the full source and destination enumerations.
    pub fn new() -> Self {
        Self {
            sources: build_sources(),
            destinations: build_destinations(),
        }
    }

    /// Modulation sources, in enumeration order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Addressable destination parameters, in enumeration order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Draws one routing.
    ///
    /// `empty_chance` is a percentage in `[0, 100]`: a uniform percentage
    /// roll below it yields the unused-slot routing, otherwise source and
    /// destination are picked uniformly and independently. No rejection of
    /// duplicates across draws.
    pub fn draw(&self, rng: &mut impl Rng, empty_chance: f64) -> Modulation {
        if rng.gen::<f64>() * 100.0 < empty_chance {
            return Modulation::empty();
        }

        Modulation {
            destination: self
                .destinations
                .choose(rng)
                .cloned()
                .unwrap_or_default(),
            source: self.sources.choose(rng).cloned().unwrap_or_default(),
        }
    }
}

impl Default for RoutingPool {
    fn default() -> Self {
        Self::new()
    }
}

fn build_sources() -> Vec<String> {
    let mut sources = Vec::new();

    for i in 1..=6 {
        sources.push(format!("env_{i}"));
    }
    for i in 1..=8 {
        sources.push(format!("lfo_{i}"));
    }
    for i in 1..=4 {
        sources.push(format!("macro_control_{i}"));
    }
    for perf in [
        "note",
        "velocity",
        "mod_wheel",
        "pitch_wheel",
        "aftertouch",
        "lift",
        "random",
        "stereo",
    ] {
        sources.push(perf.to_string());
    }

    sources
}

fn build_destinations() -> Vec<String> {
    let mut dests = Vec::new();

    for i in 1..=3 {
        for suffix in [
            "transpose",
            "tune",
            "level",
            "pan",
            "unison_detune",
            "unison_voices",
            "phase",
            "random_phase",
            "distortion_mix",
            "distortion_drive",
            "spectral_unison_method",
            "spectral_morph_amount",
            "spectral_unison_voices",
            "spectral_unison_amount",
            "wave_frame",
            "frame_spread",
            "frame_offset",
        ] {
            dests.push(format!("osc_{i}_{suffix}"));
        }
    }

    for i in 1..=8 {
        for suffix in [
            "delay_time",
            "fade_time",
            "frequency",
            "keytrack_transpose",
            "keytrack_tune",
            "phase",
            "smooth_mode",
            "smooth_time",
            "stereo",
        ] {
            dests.push(format!("lfo_{i}_{suffix}"));
        }
    }

    for filter in ["1", "2", "fx"] {
        for suffix in [
            "blend",
            "blend_transpose",
            "cutoff",
            "drive",
            "filter_input",
            "formant_resonance",
            "formant_spread",
            "formant_transpose",
            "formant_x",
            "formant_y",
            "keytrack",
            "mix",
            "model",
            "on",
            "resonance",
            "style",
        ] {
            dests.push(format!("filter_{filter}_{suffix}"));
        }
    }

    for effect in [
        "chorus_dry_wet",
        "chorus_feedback",
        "chorus_spread",
        "chorus_delay_2",
        "chorus_delay_1",
        "chorus_mod_depth",
        "chorus_cutoff",
        "compressor_attack",
        "compressor_high_gain",
        "compressor_band_gain",
        "compressor_low_gain",
        "compressor_mix",
        "compressor_release",
        "delay_tempo",
        "delay_dry_wet",
        "delay_feedback",
        "delay_filter_cutoff",
        "delay_filter_spread",
        "distortion_mix",
        "distortion_filter_blend",
        "distortion_drive",
        "distortion_filter_cutoff",
        "distortion_filter_resonance",
        "eq_low_resonance",
        "eq_low_cutoff",
        "eq_low_gain",
        "flanger_dry_wet",
        "flanger_mod_depth",
        "flanger_feedback",
        "flanger_center",
        "flanger_phase_offset",
        "flanger_tempo",
        "phaser_dry_wet",
        "phaser_feedback",
        "phaser_mod_depth",
        "phaser_center",
        "phaser_blend",
        "phaser_tempo",
        "phaser_phase_offset",
        "reverb_dry_wet",
        "reverb_delay",
        "reverb_chorus_amount",
        "reverb_low_shelf_cutoff",
        "reverb_low_shelf_gain",
        "reverb_chorus_frequency",
        "reverb_size",
        "reverb_decay_time",
        "reverb_pre_high_cutoff",
    ] {
        dests.push(effect.to_string());
    }

    for i in [3, 5, 6, 7, 8] {
        dests.push(format!("modulation_{i}_amount"));
    }

    dests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_enumeration_sizes() {
        let pool = RoutingPool::new();
        // 6 envelopes + 8 LFOs + 4 macros + 8 performance controls
        assert_eq!(pool.sources().len(), 26);
        // 3*17 oscillator + 8*9 LFO + 3*16 filter + 48 effect + 5 modulation slots
        assert_eq!(pool.destinations().len(), 51 + 72 + 48 + 48 + 5);
    }

    #[test]
    fn test_routing_is_both_or_neither() {
        let pool = RoutingPool::new();
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let m = pool.draw(&mut rng, 50.0);
            if m.is_empty() {
                assert_eq!(m.source, "");
                assert_eq!(m.destination, "");
            } else {
                assert!(pool.sources().contains(&m.source));
                assert!(pool.destinations().contains(&m.destination));
            }
        }
    }

    #[test]
    fn test_full_empty_chance_always_empty() {
        let pool = RoutingPool::new();
        let mut rng = create_rng(43);
        for _ in 0..200 {
            assert!(pool.draw(&mut rng, 100.0).is_empty());
        }
    }

    #[test]
    fn test_zero_empty_chance_never_empty() {
        let pool = RoutingPool::new();
        let mut rng = create_rng(44);
        for _ in 0..200 {
            assert!(!pool.draw(&mut rng, 0.0).is_empty());
        }
    }
}

//! Wavetable generator.
//!
//! Generates a keyframed "Audio File Source" wavetable: a random number of
//! keyframes at sorted positions on the 0-256 frame axis, each with a random
//! start offset, fade, and window size from the format's allowed set. All
//! generated tables reference the same constant placeholder audio payload.

use rand::seq::SliceRandom;
use rand::Rng;

use presetforge_preset::document::{ALLOWED_WINDOW_SIZES, KEYFRAME_POSITION_MAX};
use presetforge_preset::{Keyframe, Wavetable, WavetableComponent, WavetableGroup, SAMPLE_RATE};

use crate::rng::random_float;

/// Keyframe count domain.
const KEYFRAME_COUNT: (i64, i64) = (2, 8);

/// Start offset domain, in samples.
const START_POSITION_RANGE: (f64, f64) = (0.0, 4000.0);

/// Window fade domain.
const WINDOW_FADE_RANGE: (f64, f64) = (0.5, 1.0);

/// Fixed component metadata expected by the loader.
const COMPONENT_RANDOM_SEED: i64 = -919671038;
const COMPONENT_WINDOW_SIZE: f64 = 1012.9000244140625;
const COMPONENT_KIND: &str = "Audio File Source";
const WAVETABLE_NAME: &str = "fm sine";
const WAVETABLE_VERSION: &str = "1.5.5";

/// Placeholder audio payload shared by every generated wavetable (a tiny
/// silent WAV, base64). The loader only needs the key populated; the bulk
/// sanitizer strips real payloads to nothing anyway.
const AUDIO_FILE_PLACEHOLDER: &str =
    "UklGRiQAAABXQVZFZm10IBAAAAABAAEARKwAAIhYAQACABAAZGF0YQAAAAA=";

/// Generates one random wavetable.
pub fn random_wavetable(rng: &mut impl Rng) -> Wavetable {
    let count = rng.gen_range(KEYFRAME_COUNT.0..=KEYFRAME_COUNT.1) as usize;

    let mut positions: Vec<u32> = (0..count)
        .map(|_| rng.gen_range(0..=KEYFRAME_POSITION_MAX))
        .collect();
    positions.sort_unstable();

    let keyframes = positions
        .into_iter()
        .map(|position| Keyframe {
            position,
            start_position: random_float(rng, START_POSITION_RANGE.0, START_POSITION_RANGE.1),
            window_fade: random_float(rng, WINDOW_FADE_RANGE.0, WINDOW_FADE_RANGE.1),
            window_size: *ALLOWED_WINDOW_SIZES
                .choose(rng)
                .unwrap_or(&ALLOWED_WINDOW_SIZES[0]),
            wave_data: String::new(),
        })
        .collect();

    Wavetable {
        author: String::new(),
        full_normalize: false,
        groups: vec![WavetableGroup {
            components: vec![WavetableComponent {
                audio_file: AUDIO_FILE_PLACEHOLDER.to_string(),
                audio_sample_rate: SAMPLE_RATE,
                fade_style: 2,
                interpolation_style: 1,
                keyframes,
                normalize_gain: true,
                normalize_mult: false,
                phase_style: 2,
                random_seed: COMPONENT_RANDOM_SEED,
                kind: COMPONENT_KIND.to_string(),
                window_size: COMPONENT_WINDOW_SIZE,
            }],
        }],
        name: WAVETABLE_NAME.to_string(),
        remove_all_dc: false,
        version: WAVETABLE_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_single_group_single_component() {
        let mut rng = create_rng(42);
        let wt = random_wavetable(&mut rng);
        assert_eq!(wt.groups.len(), 1);
        assert_eq!(wt.groups[0].components.len(), 1);
        assert_eq!(wt.groups[0].components[0].kind, "Audio File Source");
    }

    #[test]
    fn test_keyframe_positions_sorted_and_bounded() {
        let mut rng = create_rng(43);
        for _ in 0..200 {
            let wt = random_wavetable(&mut rng);
            let keyframes = &wt.groups[0].components[0].keyframes;
            assert!((2..=8).contains(&keyframes.len()));
            assert!(keyframes
                .windows(2)
                .all(|w| w[0].position <= w[1].position));
            assert!(keyframes.iter().all(|k| k.position <= 256));
        }
    }

    #[test]
    fn test_keyframe_fields_stay_in_domain() {
        let mut rng = create_rng(44);
        for _ in 0..200 {
            let wt = random_wavetable(&mut rng);
            for k in &wt.groups[0].components[0].keyframes {
                assert!((0.0..=4000.0).contains(&k.start_position));
                assert!((0.5..=1.0).contains(&k.window_fade));
                assert!(ALLOWED_WINDOW_SIZES.contains(&k.window_size));
                assert!(k.wave_data.is_empty());
            }
        }
    }

    #[test]
    fn test_placeholder_payload_is_shared() {
        let mut rng = create_rng(45);
        let a = random_wavetable(&mut rng);
        let b = random_wavetable(&mut rng);
        assert_eq!(
            a.groups[0].components[0].audio_file,
            b.groups[0].components[0].audio_file
        );
    }
}

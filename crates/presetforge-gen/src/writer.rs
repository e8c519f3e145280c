//! Preset writer.
//!
//! Serializes one document to a uniquely named file in the output directory.
//! Collisions are not detected: a repeated random name or an explicit base
//! name silently overwrites.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use presetforge_preset::{Preset, PRESET_EXTENSION};

use crate::error::GenResult;
use crate::rng::random_name;

/// Length of generated random filenames.
const RANDOM_NAME_LEN: usize = 8;

/// Computes the filename for preset `index` of a `count`-preset run.
///
/// An explicit base name gets a 1-based numeric suffix when the run produces
/// more than one file; without a base name each file gets a random
/// alphabetic name.
pub fn preset_filename(
    rng: &mut impl Rng,
    base_name: Option<&str>,
    index: u32,
    count: u32,
) -> String {
    match base_name {
        Some(base) if count > 1 => format!("{}_{}.{}", base, index + 1, PRESET_EXTENSION),
        Some(base) => format!("{}.{}", base, PRESET_EXTENSION),
        None => format!("{}.{}", random_name(rng, RANDOM_NAME_LEN), PRESET_EXTENSION),
    }
}

/// Writes one preset document to `dir/filename`.
///
/// Creates the directory if absent (idempotent). I/O failures surface to
/// the caller; nothing is retried.
pub fn write_preset(preset: &Preset, dir: &Path, filename: &str) -> GenResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, preset.to_json_pretty()?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{assemble, AssembleParams};
    use crate::modulation::RoutingPool;
    use crate::rng::create_rng;

    fn test_preset() -> Preset {
        let pool = RoutingPool::new();
        let mut rng = create_rng(42);
        let params = AssembleParams {
            polyphony_range: (1, 32),
            empty_mod_chance: 70.0,
            mod_amount_range: (-1.0, 1.0),
            mod_power_range: (-4.0, 4.0),
        };
        assemble(&mut rng, "Keys", &params, &pool)
    }

    #[test]
    fn test_filename_policy() {
        let mut rng = create_rng(42);

        assert_eq!(
            preset_filename(&mut rng, Some("mybass"), 0, 1),
            "mybass.vital"
        );
        assert_eq!(
            preset_filename(&mut rng, Some("mybass"), 0, 3),
            "mybass_1.vital"
        );
        assert_eq!(
            preset_filename(&mut rng, Some("mybass"), 2, 3),
            "mybass_3.vital"
        );

        let random = preset_filename(&mut rng, None, 0, 3);
        assert!(random.ends_with(".vital"));
        let stem = random.trim_end_matches(".vital");
        assert_eq!(stem.len(), 8);
        assert!(stem.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let path = write_preset(&test_preset(), &nested, "out.vital").unwrap();
        assert!(path.exists());
        assert_eq!(path, nested.join("out.vital"));

        // Written content parses back to the same document.
        let content = fs::read_to_string(&path).unwrap();
        let parsed = Preset::from_json(&content).unwrap();
        assert_eq!(parsed, test_preset());
    }

    #[test]
    fn test_write_overwrites_silently() {
        let dir = tempfile::tempdir().unwrap();
        let preset = test_preset();

        write_preset(&preset, dir.path(), "same.vital").unwrap();
        write_preset(&preset, dir.path(), "same.vital").unwrap();

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}

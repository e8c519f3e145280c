//! Generation entry point.
//!
//! Generates the requested number of presets strictly sequentially: each
//! preset is assembled fully in memory, then written, before the next one
//! starts. Each preset runs on its own derived RNG.

use std::path::PathBuf;

use crate::assemble::{assemble, AssembleParams};
use crate::error::GenResult;
use crate::modulation::RoutingPool;
use crate::request::GenerateRequest;
use crate::rng::{create_preset_rng, seed_from_entropy};
use crate::writer::{preset_filename, write_preset};

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// The base seed the run used (supplied or drawn from entropy).
    pub base_seed: u32,
    /// Paths of the written preset files, in generation order.
    pub paths: Vec<PathBuf>,
}

/// Generates `request.count` presets into `request.out_dir`.
pub fn generate(request: &GenerateRequest) -> GenResult<GenerateOutcome> {
    request.validate()?;

    let base_seed = request.seed.unwrap_or_else(seed_from_entropy);
    let pool = RoutingPool::new();
    let params = AssembleParams::from(request);

    let mut paths = Vec::with_capacity(request.count as usize);
    for index in 0..request.count {
        let mut rng = create_preset_rng(base_seed, index);
        let preset = assemble(&mut rng, &request.style, &params, &pool);
        let filename = preset_filename(
            &mut rng,
            request.base_name.as_deref(),
            index,
            request.count,
        );
        paths.push(write_preset(&preset, &request.out_dir, &filename)?);
    }

    Ok(GenerateOutcome { base_seed, paths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use presetforge_preset::Preset;
    use std::fs;

    #[test]
    fn test_generates_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            count: 4,
            out_dir: dir.path().to_path_buf(),
            seed: Some(42),
            ..GenerateRequest::default()
        };

        let outcome = generate(&request).unwrap();
        assert_eq!(outcome.base_seed, 42);
        assert_eq!(outcome.paths.len(), 4);
        for path in &outcome.paths {
            assert!(path.exists());
            let preset = Preset::from_json(&fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(preset.settings.lfos.len(), 8);
            assert_eq!(preset.settings.modulations.len(), 64);
            assert_eq!(preset.settings.wavetables.len(), 3);
        }
    }

    #[test]
    fn test_base_name_gets_numeric_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            count: 3,
            out_dir: dir.path().to_path_buf(),
            base_name: Some("lead".to_string()),
            seed: Some(7),
            ..GenerateRequest::default()
        };

        let outcome = generate(&request).unwrap();
        let names: Vec<String> = outcome
            .paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["lead_1.vital", "lead_2.vital", "lead_3.vital"]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let make = |out_dir: PathBuf| GenerateRequest {
            count: 2,
            out_dir,
            base_name: Some("x".to_string()),
            seed: Some(123),
            style: "Pad".to_string(),
            ..GenerateRequest::default()
        };

        generate(&make(dir_a.path().to_path_buf())).unwrap();
        generate(&make(dir_b.path().to_path_buf())).unwrap();

        for name in ["x_1.vital", "x_2.vital"] {
            let a = fs::read_to_string(dir_a.path().join(name)).unwrap();
            let b = fs::read_to_string(dir_b.path().join(name)).unwrap();
            assert_eq!(a, b, "{name} differs between identical seeded runs");
        }
    }

    #[test]
    fn test_invalid_request_is_rejected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("untouched");
        let request = GenerateRequest {
            count: 0,
            out_dir: out_dir.clone(),
            ..GenerateRequest::default()
        };

        assert!(generate(&request).is_err());
        assert!(!out_dir.exists());
    }
}

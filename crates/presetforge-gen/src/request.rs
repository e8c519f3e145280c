//! Generation request record.
//!
//! A single explicit configuration record with named, typed fields. The
//! defaults describe a one-preset run with a random style.

use std::path::PathBuf;

use crate::error::{GenError, GenResult};

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Style name; `"Random"` resolves per preset. Unknown names fall back
    /// to the default style's ranges.
    pub style: String,
    /// Number of presets to generate.
    pub count: u32,
    /// Output directory, created if absent.
    pub out_dir: PathBuf,
    /// Base filename. With a base name and count > 1 each file gets a
    /// numeric suffix; without one each file gets a random alphabetic name.
    pub base_name: Option<String>,
    /// Polyphony domain (integer, inclusive).
    pub polyphony_range: (i64, i64),
    /// Volume domain. Accepted but not applied: the written `volume` is a
    /// fixed constant (see [`crate::assemble::FIXED_VOLUME`]).
    pub volume_range: (f64, f64),
    /// Percentage chance in [0, 100] that a modulation slot is left empty.
    pub empty_mod_chance: f64,
    /// Modulation amount domain.
    pub mod_amount_range: (f64, f64),
    /// Modulation power domain.
    pub mod_power_range: (f64, f64),
    /// Base seed; `None` draws one from OS entropy.
    pub seed: Option<u32>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            style: "Random".to_string(),
            count: 1,
            out_dir: PathBuf::from("random_presets"),
            base_name: None,
            polyphony_range: (1, 32),
            volume_range: (1000.0, 8000.0),
            empty_mod_chance: 70.0,
            mod_amount_range: (-1.0, 1.0),
            mod_power_range: (-4.0, 4.0),
            seed: None,
        }
    }
}

impl GenerateRequest {
    /// Validates the request.
    ///
    /// Violations are reported as errors, never silently replaced with
    /// defaults. Reversed range bounds are deliberately not rejected; they
    /// propagate to the draws (see `rng`).
    pub fn validate(&self) -> GenResult<()> {
        if self.count == 0 {
            return Err(GenError::invalid_param("count", "must be at least 1"));
        }
        if !(0.0..=100.0).contains(&self.empty_mod_chance) {
            return Err(GenError::invalid_param(
                "empty_mod_chance",
                format!(
                    "must be a percentage in [0, 100], got {}",
                    self.empty_mod_chance
                ),
            ));
        }
        Ok(())
    }
}

//! Generate command implementation
//!
//! Builds a [`GenerateRequest`] from the command-line flags and writes the
//! requested number of preset files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use presetforge_gen::{generate, GenerateRequest};

/// Flags shared by the `generate` and `bank` commands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Style name (see `presetforge styles`); "Random" picks one per preset
    #[arg(short, long, default_value = "Random")]
    pub style: String,

    /// Number of presets to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: u32,

    /// Output directory (created if absent)
    #[arg(short, long, default_value = "random_presets")]
    pub out_dir: String,

    /// Base filename; a 1-based numeric suffix is added when count > 1.
    /// Without it each preset gets a random alphabetic name
    #[arg(long)]
    pub name: Option<String>,

    /// Base seed for reproducible runs (default: drawn from OS entropy)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Percentage chance in [0, 100] that a modulation slot stays empty
    #[arg(long, default_value = "70.0")]
    pub empty_mod_chance: f64,

    /// Lower polyphony bound
    #[arg(long, default_value = "1")]
    pub poly_min: i64,

    /// Upper polyphony bound
    #[arg(long, default_value = "32")]
    pub poly_max: i64,

    /// Lower volume bound (accepted but unused: the written volume is a
    /// fixed constant)
    #[arg(long, default_value = "1000.0")]
    pub vol_min: f64,

    /// Upper volume bound (accepted but unused: the written volume is a
    /// fixed constant)
    #[arg(long, default_value = "8000.0")]
    pub vol_max: f64,

    /// Lower modulation amount bound
    #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
    pub amount_min: f64,

    /// Upper modulation amount bound
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub amount_max: f64,

    /// Lower modulation power bound
    #[arg(long, default_value = "-4.0", allow_hyphen_values = true)]
    pub power_min: f64,

    /// Upper modulation power bound
    #[arg(long, default_value = "4.0", allow_hyphen_values = true)]
    pub power_max: f64,
}

impl GenerateArgs {
    /// Converts the parsed flags into a generation request.
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            style: self.style.clone(),
            count: self.count,
            out_dir: PathBuf::from(&self.out_dir),
            base_name: self.name.clone(),
            polyphony_range: (self.poly_min, self.poly_max),
            volume_range: (self.vol_min, self.vol_max),
            empty_mod_chance: self.empty_mod_chance,
            mod_amount_range: (self.amount_min, self.amount_max),
            mod_power_range: (self.power_min, self.power_max),
            seed: self.seed,
        }
    }
}

/// Run the generate command
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let request = args.to_request();
    let outcome = generate(&request).context("preset generation failed")?;

    println!(
        "{} generated {} preset(s) with seed {}",
        "ok".green(),
        outcome.paths.len(),
        outcome.base_seed
    );
    for path in &outcome.paths {
        println!("  {} {}", "->".green(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use presetforge_preset::Preset;
    use std::fs;

    fn args_for(out_dir: &str) -> GenerateArgs {
        GenerateArgs {
            style: "Keys".to_string(),
            count: 2,
            out_dir: out_dir.to_string(),
            name: Some("keys".to_string()),
            seed: Some(9),
            empty_mod_chance: 70.0,
            poly_min: 1,
            poly_max: 32,
            vol_min: 1000.0,
            vol_max: 8000.0,
            amount_min: -1.0,
            amount_max: 1.0,
            power_min: -4.0,
            power_max: 4.0,
        }
    }

    #[test]
    fn test_run_writes_parseable_presets() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        run(&args_for(&out_dir.to_string_lossy())).unwrap();

        for name in ["keys_1.vital", "keys_2.vital"] {
            let content = fs::read_to_string(out_dir.join(name)).unwrap();
            let preset = Preset::from_json(&content).unwrap();
            assert_eq!(preset.settings.lfos.len(), 8);
        }
    }

    #[test]
    fn test_run_rejects_invalid_flags() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(&dir.path().to_string_lossy());
        args.empty_mod_chance = 150.0;
        assert!(run(&args).is_err());
    }
}

//! Bank command implementation
//!
//! Same generation flags as `generate`, but the run ends with a single bank
//! archive instead of loose preset files.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use presetforge_gen::pack_bank;

use super::generate::GenerateArgs;

/// Run the bank command
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let request = args.to_request();
    let outcome = pack_bank(&request).context("bank packaging failed")?;

    println!(
        "{} packed {} preset(s) with seed {}",
        "ok".green(),
        outcome.preset_count,
        outcome.base_seed
    );
    println!("  {} {}", "->".green(), outcome.path.display());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_leaves_a_single_bank_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            style: "Bass".to_string(),
            count: 2,
            out_dir: dir.path().to_string_lossy().into_owned(),
            name: None,
            seed: Some(5),
            empty_mod_chance: 70.0,
            poly_min: 1,
            poly_max: 32,
            vol_min: 1000.0,
            vol_max: 8000.0,
            amount_min: -1.0,
            amount_max: 1.0,
            power_min: -4.0,
            power_max: 4.0,
        };

        run(&args).unwrap();

        let entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with(".vitalbank"));
    }
}

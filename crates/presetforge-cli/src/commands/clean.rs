//! Clean command implementation
//!
//! Recursively scans a directory for preset files and strips the embedded
//! sample and wavetable audio payloads in place. Files that fail to parse
//! are reported and skipped; the command keeps going.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use walkdir::WalkDir;

use presetforge_preset::{sanitize_file, PRESET_EXTENSION};

/// Flags for the `clean` command.
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Directory scanned recursively for preset files
    #[arg(short, long)]
    pub input_dir: String,
}

/// Run the clean command
///
/// # Returns
/// Exit code: 0 if every preset file was cleaned, 1 if any failed
pub fn run(args: &CleanArgs) -> Result<ExitCode> {
    let root = Path::new(&args.input_dir);
    if !root.is_dir() {
        bail!("not a directory: {}", root.display());
    }

    let mut cleaned = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(PRESET_EXTENSION) {
            continue;
        }
        match sanitize_file(path) {
            Ok(()) => {
                println!("  {} {}", "ok".green(), path.display());
                cleaned += 1;
            }
            Err(e) => {
                println!("  {} {}: {}", "!!".red(), path.display(), e);
                failed += 1;
            }
        }
    }

    println!();
    println!("{cleaned} cleaned, {failed} failed");

    if failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

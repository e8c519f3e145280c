//! Styles command implementation
//!
//! Prints the per-style parameter domains the generator draws from.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use presetforge_gen::{ranges_for, DEFAULT_STYLE, STYLES};

/// Run the styles command
pub fn run() -> Result<ExitCode> {
    println!("{}", "Preset styles".cyan().bold());
    println!("{}", "=============".cyan());
    println!();

    for style in STYLES {
        let ranges = ranges_for(style);
        println!("{}", style.bold());
        println!(
            "  polyphony      {:>7} .. {}",
            ranges.polyphony.0, ranges.polyphony.1
        );
        println!(
            "  osc level      {:>7} .. {}",
            ranges.osc_level.0, ranges.osc_level.1
        );
        println!(
            "  filter cutoff  {:>7} .. {}",
            ranges.filter_cutoff.0, ranges.filter_cutoff.1
        );
        println!(
            "  env attack     {:>7} .. {}",
            ranges.env_attack.0, ranges.env_attack.1
        );
        println!(
            "  env decay      {:>7} .. {}",
            ranges.env_decay.0, ranges.env_decay.1
        );
        println!(
            "  env sustain    {:>7} .. {}",
            ranges.env_sustain.0, ranges.env_sustain.1
        );
        println!(
            "  env release    {:>7} .. {}",
            ranges.env_release.0, ranges.env_release.1
        );
        println!();
    }

    println!(
        "Unknown style names fall back to {}; \"Random\" picks a style per preset.",
        DEFAULT_STYLE.bold()
    );

    Ok(ExitCode::SUCCESS)
}

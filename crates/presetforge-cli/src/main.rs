//! Presetforge CLI - Randomized synthesizer preset generation
//!
//! This binary provides commands for generating randomized preset files,
//! packing them into bank archives, and scrubbing audio payloads from
//! existing presets.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

// Use modules from the library crate
use presetforge_cli::commands;

/// Presetforge - Randomized Synth Preset Generator
#[derive(Parser)]
#[command(name = "presetforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate randomized preset files
    Generate(commands::generate::GenerateArgs),

    /// Generate presets and pack them into a single bank archive
    Bank(commands::generate::GenerateArgs),

    /// Strip embedded sample and wavetable audio from existing presets
    Clean(commands::clean::CleanArgs),

    /// List the per-style parameter domains
    Styles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
        Commands::Bank(args) => commands::bank::run(&args),
        Commands::Clean(args) => commands::clean::run(&args),
        Commands::Styles => commands::styles::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

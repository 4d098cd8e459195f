//! redid - EDID decoder
//!
//! Reads an EDID dump (raw binary or hex text) and prints the monitor's
//! identity, its display descriptors and the resolutions it advertises.
//!
//! Decoding lives in `redid-core`, which is `no_std` and usable on its own;
//! this binary only loads input and formats output.

mod cli;
mod commands;
mod input;

use clap::Parser;
use cli::{Cli, Commands};
use redid_core::sample::SAMPLE_EDID;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let result = match cli.command {
        Commands::Info { input, format } => {
            let data = input::load(&input)?;
            commands::run_info(&data, format)
        }
        Commands::Resolutions { input } => {
            let data = input::load(&input)?;
            commands::run_resolutions(&data)
        }
        Commands::Descriptors { input, raw } => {
            let data = input::load(&input)?;
            commands::run_descriptors(&data, raw)
        }
        Commands::Sample { format } => {
            log::debug!("Decoding built-in sample ({} bytes)", SAMPLE_EDID.len());
            commands::run_info(&SAMPLE_EDID, format)
        }
    };

    result
}

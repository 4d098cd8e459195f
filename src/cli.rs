//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redid")]
#[command(author, version, about = "EDID decoder", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for decoded summaries
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// TOML document
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode an EDID and print a summary
    Info {
        /// EDID file, raw binary or hex text ("-" for stdin)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every advertised resolution
    Resolutions {
        /// EDID file, raw binary or hex text ("-" for stdin)
        input: PathBuf,
    },

    /// Show the four display descriptors
    Descriptors {
        /// EDID file, raw binary or hex text ("-" for stdin)
        input: PathBuf,

        /// Also print the raw bytes of each descriptor
        #[arg(long)]
        raw: bool,
    },

    /// Decode the built-in sample EDID (Dell P2418HT)
    Sample {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

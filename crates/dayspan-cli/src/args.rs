//! Command-line argument definitions for the Dayspan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input source, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Dayspan overlap checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input event list; standard input is read when omitted or `-`
    #[arg(help = "Path to the input file (default: standard input)")]
    pub input: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

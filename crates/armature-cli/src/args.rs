//! Command-line argument definitions for the Armature CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The rendered architecture is fixed, so arguments only
//! control configuration file selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the airline architecture renderer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

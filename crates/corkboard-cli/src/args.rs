//! Command-line argument definitions for the Corkboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the arrange
//! strategy, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Corkboard board arranger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input board file (JSON)
    #[arg(help = "Path to the input board file")]
    pub input: String,

    /// Path to the arranged output board file
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Arrange strategy (grid, masonry, compact); overrides the configuration
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Fit the canvas to the arranged panels and report the transform
    #[arg(long)]
    pub fit: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

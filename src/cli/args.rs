//! CLI argument definitions.
//!
//! Envcheck has a single flag-free pipeline; the arguments here only tune
//! output and logging.

use clap::Parser;

/// Envcheck - heuristic sanity checker for .env files.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

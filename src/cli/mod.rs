//! Command-line interface for envcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - The check command and its result type

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{CheckCommand, CommandResult};

//! Envcheck - heuristic sanity checker for .env files.
//!
//! Envcheck locates a project's environment file, parses its key/value
//! entries, and reports likely misconfigurations (empty values, unquoted
//! spaces, weak-looking secrets, unparsable lines) before they bite at
//! runtime.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check command
//! - [`locator`] - Candidate-file discovery in the working directory
//! - [`parser`] - Line-oriented key/value parsing
//! - [`analyzer`] - Heuristic rules and issue collection
//! - [`report`] - Structured report and human-readable rendering
//! - [`error`] - Error types and result alias
//!
//! # Example
//!
//! ```
//! use envcheck::parser::parse;
//!
//! let parsed = parse("DATABASE_URL=postgres://localhost/db\nDEBUG=\n");
//! assert_eq!(parsed.variables.len(), 2);
//! assert_eq!(parsed.variables[0].key, "DATABASE_URL");
//! assert_eq!(parsed.variables[1].value, "");
//! ```
//!
//! For end-to-end behavior against real files, see the integration tests.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod locator;
pub mod parser;
pub mod report;

pub use error::{EnvcheckError, Result};

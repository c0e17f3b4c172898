//! Check results and rendering.
//!
//! [`Report`] is the structured output of one check run: the variables and
//! issues in source order plus a derived confidence score. It is built
//! once per invocation and handed to a formatter; nothing is persisted.

pub mod human;

pub use human::HumanFormatter;

use std::path::PathBuf;

use crate::analyzer::Issue;
use crate::parser::Variable;

/// Fixed 8-character token shown in place of sensitive values.
pub const MASK: &str = "********";

/// Whether a key names a value that should never be echoed.
///
/// Substring match, same net as the masking in the report output: `SECRET`
/// or `KEY` anywhere in the key.
pub fn is_sensitive(key: &str) -> bool {
    key.contains("SECRET") || key.contains("KEY")
}

/// Structured result of one check run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Path of the environment file that was checked.
    pub source: PathBuf,
    /// Parsed variables in declaration order.
    pub variables: Vec<Variable>,
    /// All issues, ordered by line number.
    pub issues: Vec<Issue>,
}

impl Report {
    /// Build a report from the pipeline's output.
    pub fn new(source: PathBuf, variables: Vec<Variable>, issues: Vec<Issue>) -> Self {
        Self {
            source,
            variables,
            issues,
        }
    }

    /// Derived confidence score in `[10, 100]`.
    ///
    /// 100 with no issues, minus 10 per issue, floored at 10.
    pub fn confidence(&self) -> u8 {
        if self.issues.is_empty() {
            100
        } else {
            let score = 100_i64 - self.issues.len() as i64 * 10;
            score.max(10) as u8
        }
    }

    /// The value to display for a variable, masked when the key is
    /// sensitive.
    pub fn display_value<'a>(&self, variable: &'a Variable) -> &'a str {
        if is_sensitive(&variable.key) {
            MASK
        } else {
            &variable.value
        }
    }
}

//! Environment-file parsing.
//!
//! Parses the line-oriented `KEY=value` format into [`Variable`] entries.
//! The grammar is deliberately permissive: a key is `[A-Z_][A-Z0-9_]*`,
//! an optional `=` introduces the value, and everything after the `=` is
//! taken verbatim (no unquoting, no trimming of the value, further `=`
//! signs included). A bare `KEY` with no `=` parses as an empty value.
//!
//! Lines that are neither blank, comments, nor `KEY[=value]` shaped are
//! recorded as unparsable-line issues; parsing never aborts.

use regex::Regex;
use std::sync::LazyLock;

use crate::analyzer::{Issue, IssueKind};

static RE_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z_][A-Z0-9_]*)(?:=(.*))?$").unwrap());

/// A single parsed `KEY=value` entry.
///
/// Duplicate keys are not deduplicated; each occurrence is a separate
/// entry in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The variable name, matching `[A-Z_][A-Z0-9_]*`.
    pub key: String,
    /// The raw value text after `=`, possibly empty.
    pub value: String,
    /// Source line number (1-based).
    pub line: usize,
}

/// Output of [`parse`]: variables and parse-failure issues, each in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub variables: Vec<Variable>,
    pub issues: Vec<Issue>,
}

/// Parse environment-file content.
///
/// Pure function of the input text: every non-blank, non-comment line
/// yields exactly one [`Variable`] or one unparsable-line [`Issue`].
pub fn parse(content: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match RE_ASSIGNMENT.captures(line) {
            Some(caps) => {
                let key = caps[1].to_string();
                let value = caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string();
                parsed.variables.push(Variable {
                    key,
                    value,
                    line: line_no,
                });
            }
            None => {
                parsed.issues.push(Issue::new(
                    IssueKind::UnparsableLine,
                    line_no,
                    format!("cannot parse \"{line}\""),
                ));
            }
        }
    }

    parsed
}

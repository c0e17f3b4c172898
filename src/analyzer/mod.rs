//! Heuristic analysis of parsed variables.
//!
//! The analyzer runs a fixed set of independent rules against every
//! parsed [`Variable`](crate::parser::Variable):
//!
//! - **Rules** - Individual checks ([`CheckRule`] trait, one file per rule)
//! - **Issues** - Findings with a severity label ([`Issue`])
//!
//! All findings are diagnostics; the analyzer never rejects a variable or
//! stops a run.

pub mod issue;
pub mod rule;
pub mod rules;

pub use issue::{Issue, IssueKind, Severity};
pub use rule::{builtin_rules, CheckRule};
pub use rules::{EmbeddedSpaceRule, EmptyValueRule, WeakSecretRule};

use crate::parser::{Parsed, Variable};

/// Run every built-in rule against every variable, in declaration order.
///
/// Per variable, rule findings come out in rule order; rules never
/// suppress one another.
pub fn analyze(variables: &[Variable]) -> Vec<Issue> {
    let rules = builtin_rules();
    let mut issues = Vec::new();

    for variable in variables {
        for rule in &rules {
            if let Some(issue) = rule.check(variable) {
                issues.push(issue);
            }
        }
    }

    issues
}

/// Merge parse-failure issues with analysis findings into one stream
/// ordered by line number.
///
/// The two streams are disjoint per line: an unparsable line produces no
/// variable, so a stable sort on line number fully interleaves them.
pub fn collect_issues(parsed: &Parsed) -> Vec<Issue> {
    let mut issues = parsed.issues.clone();
    issues.extend(analyze(&parsed.variables));
    issues.sort_by_key(|issue| issue.line);
    issues
}

//! Empty-value check.

use crate::analyzer::rule::CheckRule;
use crate::analyzer::{Issue, IssueKind};
use crate::parser::Variable;

/// Flags variables whose value is the empty string.
///
/// `KEY=` and a bare `KEY` line both count: either way the application
/// will see an empty value at runtime.
pub struct EmptyValueRule;

impl CheckRule for EmptyValueRule {
    fn id(&self) -> &'static str {
        "empty-value"
    }

    fn description(&self) -> &'static str {
        "Variable has an empty value"
    }

    fn check(&self, variable: &Variable) -> Option<Issue> {
        if variable.value.is_empty() {
            Some(Issue::new(
                IssueKind::EmptyValue,
                variable.line,
                format!("{} has an empty value", variable.key),
            ))
        } else {
            None
        }
    }
}

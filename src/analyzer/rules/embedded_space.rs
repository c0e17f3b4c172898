//! Embedded-space check.

use crate::analyzer::rule::CheckRule;
use crate::analyzer::{Issue, IssueKind};
use crate::parser::Variable;

/// Flags values containing a space character.
///
/// Envcheck's grammar takes values verbatim, so `GREETING=hello world`
/// parses fine here, but many dotenv loaders and shells will truncate or
/// split it unless the value is quoted.
pub struct EmbeddedSpaceRule;

impl CheckRule for EmbeddedSpaceRule {
    fn id(&self) -> &'static str {
        "embedded-space"
    }

    fn description(&self) -> &'static str {
        "Value contains unquoted spaces"
    }

    fn check(&self, variable: &Variable) -> Option<Issue> {
        if variable.value.contains(' ') {
            Some(Issue::new(
                IssueKind::EmbeddedSpace,
                variable.line,
                format!("value of {} contains unquoted spaces", variable.key),
            ))
        } else {
            None
        }
    }
}

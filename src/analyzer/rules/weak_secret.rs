//! Weak-secret check.

use crate::analyzer::rule::CheckRule;
use crate::analyzer::{Issue, IssueKind};
use crate::parser::Variable;

/// Minimum length below which a secret value looks weak.
const MIN_SECRET_LEN: usize = 10;

/// Flags secret-looking keys with suspiciously short values.
///
/// Applies to keys containing the literal substring `SECRET`. A value
/// shorter than [`MIN_SECRET_LEN`] characters is flagged; length is
/// counted in characters, not bytes. An empty secret trips both this
/// rule and the empty-value rule.
pub struct WeakSecretRule;

impl CheckRule for WeakSecretRule {
    fn id(&self) -> &'static str {
        "weak-secret"
    }

    fn description(&self) -> &'static str {
        "Secret value is shorter than 10 characters"
    }

    fn check(&self, variable: &Variable) -> Option<Issue> {
        if variable.key.contains("SECRET") && variable.value.chars().count() < MIN_SECRET_LEN {
            Some(Issue::new(
                IssueKind::WeakSecret,
                variable.line,
                format!("{} looks like a weak secret", variable.key),
            ))
        } else {
            None
        }
    }
}

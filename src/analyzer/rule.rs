//! Heuristic rule definitions.
//!
//! Each rule inspects one parsed [`Variable`] and either stays silent or
//! produces a single [`Issue`]. Rules are independent: one variable can
//! trip zero, one, or several of them, and no rule short-circuits another.

use crate::analyzer::Issue;
use crate::parser::Variable;

/// A heuristic check applied to every parsed variable.
pub trait CheckRule: Send + Sync {
    /// Stable kebab-case identifier for this rule.
    fn id(&self) -> &'static str;

    /// Description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Check one variable, returning an issue when the heuristic trips.
    fn check(&self, variable: &Variable) -> Option<Issue>;
}

/// The built-in rules, in the order their findings are emitted per variable.
pub fn builtin_rules() -> Vec<Box<dyn CheckRule>> {
    vec![
        Box::new(super::rules::EmptyValueRule),
        Box::new(super::rules::EmbeddedSpaceRule),
        Box::new(super::rules::WeakSecretRule),
    ]
}

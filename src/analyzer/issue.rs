//! Issue types.
//!
//! Every finding envcheck produces, whether a parse failure or a heuristic
//! warning, is an [`Issue`]. Issues are diagnostics only: none of them
//! ever aborts a run.

/// Severity label for an issue.
///
/// Severity affects rendering only. An `Error` issue (an unparsable line)
/// is just as non-fatal as a `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Heuristic finding on a successfully parsed variable.
    Warning,
    /// A line that could not be parsed at all.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The check that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Non-blank, non-comment line that does not fit `KEY[=value]`.
    UnparsableLine,
    /// Variable with an empty value.
    EmptyValue,
    /// Value containing unquoted spaces.
    EmbeddedSpace,
    /// Secret-looking key with a short value.
    WeakSecret,
}

impl IssueKind {
    /// Severity this kind renders with.
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::UnparsableLine => Severity::Error,
            IssueKind::EmptyValue | IssueKind::EmbeddedSpace | IssueKind::WeakSecret => {
                Severity::Warning
            }
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::UnparsableLine => write!(f, "unparsable-line"),
            IssueKind::EmptyValue => write!(f, "empty-value"),
            IssueKind::EmbeddedSpace => write!(f, "embedded-space"),
            IssueKind::WeakSecret => write!(f, "weak-secret"),
        }
    }
}

/// A diagnostic produced during parsing or analysis.
#[derive(Debug, Clone)]
pub struct Issue {
    /// The check that produced this issue.
    pub kind: IssueKind,
    /// Severity label, derived from the kind.
    pub severity: Severity,
    /// Source line number (1-based).
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Create a new issue; severity follows from the kind.
    pub fn new(kind: IssueKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_creation_derives_severity() {
        let issue = Issue::new(IssueKind::EmptyValue, 3, "DEBUG has an empty value");

        assert_eq!(issue.kind, IssueKind::EmptyValue);
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.line, 3);

        let issue = Issue::new(IssueKind::UnparsableLine, 1, "cannot parse \"x\"");
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(format!("{}", IssueKind::UnparsableLine), "unparsable-line");
        assert_eq!(format!("{}", IssueKind::EmptyValue), "empty-value");
        assert_eq!(format!("{}", IssueKind::EmbeddedSpace), "embedded-space");
        assert_eq!(format!("{}", IssueKind::WeakSecret), "weak-secret");
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }
}

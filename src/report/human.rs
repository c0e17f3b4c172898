//! Human-readable report rendering.
//!
//! Formats a [`Report`] for terminal display with optional color support.

use std::io::Write;

use console::Style;

use super::Report;
use crate::analyzer::Severity;

/// Formats check output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn severity_style(severity: Severity) -> Style {
        match severity {
            Severity::Warning => Style::new().color256(208),
            Severity::Error => Style::new().red().bold(),
        }
    }

    fn confidence_style(score: u8) -> Style {
        match score {
            100 => Style::new().green(),
            50..=99 => Style::new().color256(208),
            _ => Style::new().red(),
        }
    }

    fn closing_remark(score: u8) -> &'static str {
        match score {
            100 => "looks good.",
            50..=99 => "worth a second look.",
            _ => "fix this before deploying.",
        }
    }

    /// Render a report to the given writer.
    pub fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let source = report
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.source.display().to_string());

        // Variable listing, masked where the key looks sensitive
        writeln!(
            writer,
            "{}",
            self.paint(
                Style::new().bold(),
                &format!(
                    "Found {} environment variable(s) in {}:",
                    report.variables.len(),
                    source
                ),
            )
        )?;
        for variable in &report.variables {
            writeln!(
                writer,
                "   {}={}",
                variable.key,
                report.display_value(variable)
            )?;
        }
        writeln!(writer)?;

        // Issues in line order
        writeln!(writer, "{}", self.paint(Style::new().bold(), "Issues:"))?;
        if report.issues.is_empty() {
            writeln!(
                writer,
                "   {} No issues found. This config looks suspiciously clean.",
                self.paint(Style::new().green(), "✓")
            )?;
        } else {
            for issue in &report.issues {
                writeln!(
                    writer,
                    "   {}[{}]: line {}: {}",
                    self.paint(Self::severity_style(issue.severity), &issue.severity.to_string()),
                    issue.kind,
                    issue.line,
                    issue.message
                )?;
            }
            writeln!(writer)?;
            writeln!(writer, "Found {} potential issue(s)", report.issues.len())?;
        }
        writeln!(writer)?;

        // Derived confidence score
        let score = report.confidence();
        writeln!(
            writer,
            "Confidence: {} — {}",
            self.paint(Self::confidence_style(score), &format!("{score}%")),
            Self::closing_remark(score)
        )?;

        Ok(())
    }
}

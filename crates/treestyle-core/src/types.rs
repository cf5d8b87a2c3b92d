//! Core types for check findings and run results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a run.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A style finding reported by a check.
///
/// `message_key` identifies the finding category machine-readably
/// (e.g. `"wrap.must-wrap"`), `args` carries its parameters, and `message`
/// is the rendered human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Check code (e.g. "TS001").
    pub code: String,
    /// Check name (e.g. "alignment").
    pub check: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
    /// Machine-readable finding key (e.g. "wrap.must-wrap").
    pub message_key: String,
    /// Parameters of the finding, in key order of the message template.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Rendered human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        check: impl Into<String>,
        severity: Severity,
        line: u32,
        column: u32,
        message_key: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            check: check.into(),
            severity,
            line,
            column,
            message_key: message_key.into(),
            args,
            message: message.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{} {} at {}:{}\n  {}: {}\n",
            self.code, self.check, self.line, self.column, self.severity, self.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.code, self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic for a violation given the byte offset of its
    /// position in the source text.
    #[must_use]
    pub fn at_offset(violation: &Violation, offset: usize, length: usize) -> Self {
        Self {
            message: format!("[{}] {}", violation.code, violation.message),
            span: SourceSpan::from((offset, length)),
            label_message: violation.check.clone(),
        }
    }
}

/// Result of running checks over a set of trees.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All findings, sorted by position then code.
    pub violations: Vec<Violation>,
    /// Number of trees processed.
    pub trees_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if any finding meets or exceeds the given severity.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns findings filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts findings by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        let infos = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Adds findings from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.trees_checked += other.trees_checked;
    }

    /// Formats findings as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()`
    /// messages in test integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(report, "\n=== treestyle: {} violation(s) ===\n", failing.len());

        for v in &failing {
            let _ = writeln!(report, "{} [{}] at {}:{}", v.check, v.code, v.line, v.column);
            let _ = writeln!(report, "  {}: {}", v.severity, v.message);
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {errors} error(s), {warnings} warning(s), {infos} info(s) in {} tree(s)",
            self.trees_checked
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "TS001",
            "alignment",
            severity,
            42,
            10,
            "alignment.field-name",
            vec!["8".to_owned()],
            "field name should start at column 8",
        )
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (2, 0, 1));
    }

    #[test]
    fn violation_serde_round_trip() {
        let v = make_violation(Severity::Warning);
        let json = serde_json::to_string(&v).unwrap();
        let back: Violation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn empty_args_omitted_from_json() {
        let v = Violation::new(
            "TS004",
            "inner-assignment",
            Severity::Error,
            3,
            8,
            "inner-assignment.must-parenthesize",
            Vec::new(),
            "inner assignment should be parenthesized",
        );
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("\"args\""));
    }

    #[test]
    fn format_test_report_filters_by_severity() {
        let mut result = LintResult::new();
        result.trees_checked = 5;
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));

        let report = result.format_test_report(Severity::Error);
        assert!(report.contains("1 violation(s)"));
        assert!(report.contains("1 error(s)"));
        assert!(report.contains("1 warning(s)"));
    }
}

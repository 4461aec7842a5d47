// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Audit result types.

use crate::cli::args::OutputFormat;
use crate::error::{Result, ValidationError};
use console::{style, Style};

/// A single audit finding.
#[derive(Debug, Clone)]
pub struct AuditIssue {
    /// Issue code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Document key the issue is about, e.g. `helpUrl`.
    pub key: Option<String>,
}

impl AuditIssue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            is_error: true,
            key: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_error: false,
            ..Self::error(code, message)
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref key) = self.key {
            output.push_str(&format!(" {}", style(format!("[{}]", key)).dim()));
        }

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "suggestion": self.suggestion,
            "key": self.key,
        })
    }
}

/// Result of auditing a configuration document.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Where the document came from (a path, or "defaults").
    pub source: String,
    pub errors: Vec<AuditIssue>,
    pub warnings: Vec<AuditIssue>,
}

impl AuditReport {
    /// Create an empty report.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// File an issue under errors or warnings.
    pub fn push(&mut self, issue: AuditIssue) {
        if issue.is_error {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the audit passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Turn the report into an error when it does not pass.
    ///
    /// In strict mode warnings count as failures too.
    pub fn into_result(self, strict: bool) -> Result<()> {
        let count = if strict {
            self.issue_count()
        } else {
            self.errors.len()
        };

        if count > 0 {
            Err(ValidationError::Failed { count }.into())
        } else {
            Ok(())
        }
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!("{} {} {}", status, style(&self.source).cyan(), self.summary());

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// JSON representation of the report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "source": self.source,
            "errors": self.errors.iter().map(AuditIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(AuditIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommitrcError;

    #[test]
    fn test_report_valid() {
        let report = AuditReport::new("defaults");
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_push_sorts_by_level() {
        let mut report = AuditReport::new("defaults");
        report.push(AuditIssue::error("e", "Error"));
        report.push(AuditIssue::warning("w", "Warning"));

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.summary().contains("Invalid"));
    }

    #[test]
    fn test_into_result_strict() {
        let mut report = AuditReport::new("defaults");
        report.push(AuditIssue::warning("w", "Warning"));
        assert!(report.clone().into_result(false).is_ok());

        let err = report.into_result(true).unwrap_err();
        assert!(matches!(
            err,
            CommitrcError::Validation(ValidationError::Failed { count: 1 })
        ));
    }

    #[test]
    fn test_issue_format() {
        let issue = AuditIssue::error("help-url-invalid", "helpUrl is empty")
            .with_key("helpUrl")
            .with_suggestion("Fix it");

        let formatted = issue.format();
        assert!(formatted.contains("help-url-invalid"));
        assert!(formatted.contains("helpUrl is empty"));
        assert!(formatted.contains("Fix it"));
    }

    #[test]
    fn test_json_shape() {
        let mut report = AuditReport::new(".commitlintrc.json");
        report.push(AuditIssue::warning("extends-empty", "No preset is extended"));

        let json = report.to_json();
        assert_eq!(json["valid"], true);
        assert_eq!(json["warnings"][0]["code"], "extends-empty");
        assert_eq!(json["source"], ".commitlintrc.json");
    }
}

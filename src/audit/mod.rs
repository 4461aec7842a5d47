// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration audit.
//!
//! Checks a loaded document against the invariants the commit linter relies
//! on and reports what is wrong before the linter ever runs.

mod checks;
mod report;

pub use checks::apply_checks;
pub use report::{AuditIssue, AuditReport};

use crate::config::LintConfig;

/// Audit a configuration and collect the findings.
pub fn audit_config(config: &LintConfig, source: impl Into<String>) -> AuditReport {
    let mut report = AuditReport::new(source);
    for issue in apply_checks(config) {
        report.push(issue);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_project_config() {
        let report = audit_config(&LintConfig::default(), "defaults");
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_audit_empty_document() {
        let config: LintConfig = serde_json::from_str("{}").unwrap();
        let report = audit_config(&config, "inline");

        let codes: Vec<_> = report.errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["type-enum-missing", "issue-prefix-empty", "help-url-invalid"]
        );
        assert_eq!(report.warnings[0].code, "extends-empty");
    }
}

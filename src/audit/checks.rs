// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Invariant checks on a lint configuration.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::config::{LintConfig, Severity, TypeEnum, TYPE_ENUM};

use super::report::AuditIssue;

lazy_static! {
    /// Type tokens the conventional header pattern `^(\w*)(?:\((.*)\))?!?: (.*)$` can capture.
    static ref WORD_TOKEN: Regex = Regex::new(r"^\w+$").unwrap();
}

/// Run every check against the configuration.
pub fn apply_checks(config: &LintConfig) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    issues.extend(check_type_enum(config));
    issues.extend(check_issue_prefixes(config));
    issues.extend(check_help_url(config));
    issues.extend(check_extends(config));

    issues
}

fn type_enum_key() -> String {
    format!("rules.{}", TYPE_ENUM)
}

/// Check the `type-enum` rule.
fn check_type_enum(config: &LintConfig) -> Vec<AuditIssue> {
    match config.type_enum() {
        Ok(Some(type_enum)) => check_type_enum_values(&type_enum),
        Ok(None) => vec![AuditIssue::error(
            "type-enum-missing",
            "No type-enum rule is configured",
        )
        .with_key(type_enum_key())
        .with_suggestion("Add \"type-enum\": [2, \"always\", [\"feat\", \"fix\", ...]]")],
        Err(e) => vec![AuditIssue::error("type-enum-malformed", e.to_string())
            .with_key(type_enum_key())
            .with_suggestion("Use the shape [level, \"always\" | \"never\", [types...]]")],
    }
}

fn check_type_enum_values(type_enum: &TypeEnum) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    if type_enum.allowed.is_empty() {
        issues.push(
            AuditIssue::error("type-enum-empty", "The list of allowed types is empty")
                .with_key(type_enum_key())
                .with_suggestion("List at least one commit type"),
        );
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for value in &type_enum.allowed {
        if !seen.insert(value.as_str()) && reported.insert(value.as_str()) {
            issues.push(
                AuditIssue::error(
                    "type-enum-duplicate",
                    format!("Type '{}' is listed more than once", value),
                )
                .with_key(type_enum_key())
                .with_suggestion("Remove the repeated entry"),
            );
        }
    }

    for value in &type_enum.allowed {
        if value.trim().is_empty() {
            issues.push(
                AuditIssue::error("type-enum-blank", "An allowed type is blank")
                    .with_key(type_enum_key()),
            );
        } else if !WORD_TOKEN.is_match(value) {
            issues.push(
                AuditIssue::warning(
                    "type-enum-unmatchable",
                    format!(
                        "Type '{}' contains characters the conventional header cannot match",
                        value
                    ),
                )
                .with_key(type_enum_key())
                .with_suggestion("Use letters, digits and underscores only"),
            );
        }
    }

    if type_enum.severity != Severity::Error {
        issues.push(
            AuditIssue::warning(
                "type-enum-severity",
                format!(
                    "type-enum is set to '{}', so disallowed types will not fail the lint",
                    type_enum.severity
                ),
            )
            .with_key(type_enum_key())
            .with_suggestion("Set the level to 2"),
        );
    }

    issues
}

/// Check `parserPreset.parserOpts.issuePrefixes`.
fn check_issue_prefixes(config: &LintConfig) -> Vec<AuditIssue> {
    const KEY: &str = "parserPreset.parserOpts.issuePrefixes";
    let prefixes = &config.parser_preset.parser_opts.issue_prefixes;
    let mut issues = Vec::new();

    if prefixes.is_empty() {
        issues.push(
            AuditIssue::error("issue-prefix-empty", "No issue prefixes are configured")
                .with_key(KEY)
                .with_suggestion("Add at least one prefix, e.g. \"#\""),
        );
    }

    if prefixes.iter().any(|p| p.is_empty()) {
        issues.push(
            AuditIssue::error("issue-prefix-blank", "An issue prefix is an empty string")
                .with_key(KEY),
        );
    }

    let mut seen = HashSet::new();
    for prefix in prefixes.iter().filter(|p| !p.is_empty()) {
        if !seen.insert(prefix.as_str()) {
            issues.push(
                AuditIssue::warning(
                    "issue-prefix-duplicate",
                    format!("Issue prefix '{}' is listed more than once", prefix),
                )
                .with_key(KEY),
            );
        }
    }

    issues
}

/// Check `helpUrl`.
fn check_help_url(config: &LintConfig) -> Option<AuditIssue> {
    const KEY: &str = "helpUrl";

    if config.help_url.trim().is_empty() {
        return Some(
            AuditIssue::error("help-url-invalid", "helpUrl is empty")
                .with_key(KEY)
                .with_suggestion("Point helpUrl at your commit guidelines"),
        );
    }

    match url::Url::parse(&config.help_url) {
        Ok(parsed) if parsed.scheme() != "https" => Some(
            AuditIssue::warning(
                "help-url-insecure",
                format!("helpUrl uses the '{}' scheme", parsed.scheme()),
            )
            .with_key(KEY)
            .with_suggestion("Use an https:// link"),
        ),
        Ok(_) => None,
        Err(e) => Some(
            AuditIssue::error(
                "help-url-invalid",
                format!("helpUrl '{}' is not a valid URL: {}", config.help_url, e),
            )
            .with_key(KEY),
        ),
    }
}

/// Check `extends`.
fn check_extends(config: &LintConfig) -> Vec<AuditIssue> {
    const KEY: &str = "extends";
    let mut issues = Vec::new();

    if config.extends.is_empty() {
        issues.push(
            AuditIssue::warning("extends-empty", "No preset is extended")
                .with_key(KEY)
                .with_suggestion("Extend \"@commitlint/config-conventional\""),
        );
    }

    if config.extends.iter().any(|e| e.trim().is_empty()) {
        issues.push(AuditIssue::error("extends-blank", "A preset name is blank").with_key(KEY));
    }

    issues
}

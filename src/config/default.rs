// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project's own commit-lint document.

use std::collections::BTreeMap;

use super::schema::{
    Applicability, LintConfig, ParserOpts, ParserPreset, RuleConfig, Severity, TYPE_ENUM,
};

/// Preset the project document extends.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

/// Commit types accepted by `type-enum`, in display order.
pub const ALLOWED_TYPES: &[&str] = &[
    "fix", "feat", "docs", "style", "refactor", "perf", "test", "revert", "chore", "build", "ci",
];

/// Prefixes that introduce an issue reference.
pub const ISSUE_PREFIXES: &[&str] = &["#"];

/// Help link printed by the linter on failure.
pub const HELP_URL: &str = "https://github.com/conventional-changelog/commitlint/#what-is-commitlint";

/// Build the project document.
pub fn project_config() -> LintConfig {
    let mut rules = BTreeMap::new();
    rules.insert(
        TYPE_ENUM.to_string(),
        RuleConfig::new(Severity::Error, Applicability::Always, ALLOWED_TYPES.to_vec()),
    );

    LintConfig {
        extends: vec![CONVENTIONAL_PRESET.to_string()],
        rules,
        parser_preset: ParserPreset {
            parser_opts: ParserOpts {
                issue_prefixes: ISSUE_PREFIXES.iter().map(|p| p.to_string()).collect(),
                issue_prefixes_case_sensitive: false,
            },
        },
        help_url: HELP_URL.to_string(),
    }
}

/// The `.commitlintrc.json` shipped at the repository root.
pub fn example_config() -> &'static str {
    include_str!("../../.commitlintrc.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_example_config_matches_project_config() {
        let parsed: LintConfig =
            serde_json::from_str(example_config()).expect("Example config should parse");
        assert_eq!(parsed, project_config());
    }

    #[test]
    fn test_type_enum_entry() {
        let config = project_config();
        let value = serde_json::to_value(&config.rules[TYPE_ENUM]).unwrap();
        assert_eq!(value[0], json!(2));
        assert_eq!(value[1], json!("always"));
        assert_eq!(
            value[2],
            json!([
                "fix", "feat", "docs", "style", "refactor", "perf", "test", "revert", "chore",
                "build", "ci"
            ])
        );
    }

    #[test]
    fn test_allowed_types_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(ALLOWED_TYPES.iter().all(|t| seen.insert(*t)));
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn test_help_url_is_absolute() {
        let parsed = url::Url::parse(HELP_URL).unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.fragment(), Some("what-is-commitlint"));
    }
}

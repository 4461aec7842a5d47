// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue references made visible by `issuePrefixes`.

use regex::Regex;

use crate::config::ParserOpts;
use crate::error::{ConfigError, Result};

/// An issue reference found in commit text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReference {
    /// The matched text, e.g. `owner/repo#12`.
    pub raw: String,
    /// The prefix as written in the text.
    pub prefix: String,
    /// Issue identifier after the prefix.
    pub issue: String,
    /// `owner/repo` when the reference points at another repository.
    pub repository: Option<String>,
}

/// Build the matcher for a set of prefixes, or `None` when there are none.
fn reference_regex(prefixes: &[String], case_sensitive: bool) -> Result<Option<Regex>> {
    let mut escaped: Vec<String> = prefixes
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();

    if escaped.is_empty() {
        return Ok(None);
    }

    // Longest first so `GH-` wins over `G` when both are configured.
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();

    let flags = if case_sensitive { "" } else { "i" };
    let pattern = format!(
        r"(?:(?P<repo>[\w.-]+/[\w.-]+))?(?P<prefix>(?{}:{}))(?P<issue>[\w-]*\d+)\b",
        flags,
        escaped.join("|")
    );

    Regex::new(&pattern).map(Some).map_err(|e| {
        ConfigError::InvalidValue {
            key: "parserPreset.parserOpts.issuePrefixes".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// True when the match at `start` is glued to a preceding word, as in `C#7`.
fn follows_word(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Find every issue reference in `text` introduced by one of `prefixes`.
///
/// A reference counts anywhere except directly after a word character, so
/// `[#7]`, `Closes:#5` and both halves of `#1#2` are found while `page#12`
/// is not. Prefixes match regardless of case unless `case_sensitive` is set.
/// Results are in the order they appear.
pub fn find_references(
    text: &str,
    prefixes: &[String],
    case_sensitive: bool,
) -> Result<Vec<IssueReference>> {
    let Some(regex) = reference_regex(prefixes, case_sensitive)? else {
        return Ok(Vec::new());
    };

    let references = regex
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if follows_word(text, whole.start()) {
                return None;
            }

            let prefix = caps.name("prefix")?.as_str();
            let issue = caps.name("issue")?.as_str();
            let repository = caps.name("repo").map(|m| m.as_str().to_string());

            Some(IssueReference {
                raw: whole.as_str().to_string(),
                prefix: prefix.to_string(),
                issue: issue.to_string(),
                repository,
            })
        })
        .collect();

    Ok(references)
}

impl ParserOpts {
    /// Issue references in `text` under the configured prefixes.
    pub fn references_in(&self, text: &str) -> Result<Vec<IssueReference>> {
        find_references(text, &self.issue_prefixes, self.issue_prefixes_case_sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;

    fn project_opts() -> ParserOpts {
        LintConfig::default().parser_preset.parser_opts
    }

    fn issues(refs: &[IssueReference]) -> Vec<&str> {
        refs.iter().map(|r| r.issue.as_str()).collect()
    }

    #[test]
    fn test_hash_reference() {
        let refs = project_opts().references_in("fix: crash on start\n\nCloses #123").unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].issue, "123");
        assert_eq!(refs[0].prefix, "#");
        assert_eq!(refs[0].raw, "#123");
        assert!(refs[0].repository.is_none());
    }

    #[test]
    fn test_unconfigured_prefix_ignored() {
        let refs = project_opts().references_in("Closes GH-123").unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_multiple_in_order() {
        let refs = project_opts()
            .references_in("Refs #1, #22 (#333)")
            .unwrap();
        assert_eq!(issues(&refs), vec!["1", "22", "333"]);
    }

    #[test]
    fn test_reference_after_punctuation() {
        let opts = project_opts();
        assert_eq!(issues(&opts.references_in("[#7] fix crash").unwrap()), vec!["7"]);
        assert_eq!(issues(&opts.references_in("Closes:#5").unwrap()), vec!["5"]);
        assert_eq!(issues(&opts.references_in("[#123] fix crash").unwrap()), vec!["123"]);
    }

    #[test]
    fn test_adjacent_references() {
        let refs = project_opts().references_in("#1#2").unwrap();
        assert_eq!(issues(&refs), vec!["1", "2"]);
        assert_eq!(refs[1].raw, "#2");
    }

    #[test]
    fn test_cross_repository_reference() {
        let refs = project_opts()
            .references_in("Fixes octo-org/octo-repo#100")
            .unwrap();
        assert_eq!(refs[0].repository.as_deref(), Some("octo-org/octo-repo"));
        assert_eq!(refs[0].issue, "100");
        assert_eq!(refs[0].raw, "octo-org/octo-repo#100");
    }

    #[test]
    fn test_prefix_inside_word_ignored() {
        let refs = project_opts().references_in("see page#12 and C#7").unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_issue_must_end_in_digits() {
        let refs = project_opts().references_in("#abc and #12abc").unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_custom_prefixes() {
        let prefixes = vec!["#".to_string(), "GH-".to_string(), "PROJ-".to_string()];
        let refs = find_references("GH-123 PROJ-7 #9", &prefixes, false).unwrap();
        let found: Vec<_> = refs
            .iter()
            .map(|r| (r.prefix.as_str(), r.issue.as_str()))
            .collect();
        assert_eq!(found, vec![("GH-", "123"), ("PROJ-", "7"), ("#", "9")]);
    }

    #[test]
    fn test_prefix_case_insensitive_by_default() {
        let prefixes = vec!["GH-".to_string()];
        let refs = find_references("closes gh-12", &prefixes, false).unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].prefix, "gh-");
        assert_eq!(refs[0].issue, "12");

        let opts = ParserOpts {
            issue_prefixes: prefixes,
            issue_prefixes_case_sensitive: false,
        };
        assert_eq!(issues(&opts.references_in("Closes gh-12").unwrap()), vec!["12"]);
    }

    #[test]
    fn test_prefix_case_sensitive_when_configured() {
        let opts = ParserOpts {
            issue_prefixes: vec!["GH-".to_string()],
            issue_prefixes_case_sensitive: true,
        };
        assert!(opts.references_in("closes gh-12").unwrap().is_empty());
        assert_eq!(issues(&opts.references_in("closes GH-12").unwrap()), vec!["12"]);
    }

    #[test]
    fn test_no_prefixes() {
        assert!(find_references("#123", &[], false).unwrap().is_empty());
        assert!(find_references("#123", &[String::new()], false)
            .unwrap()
            .is_empty());
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Mirrors the commitlint configuration document key for key, so that a
//! `.commitlintrc.json` loads into these types and serializes back out
//! with the same shape.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ConfigError, Result};

/// Name of the rule restricting commit type tokens.
pub const TYPE_ENUM: &str = "type-enum";

/// The lint configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    /// Presets loaded before `rules`, in order.
    #[serde(default)]
    pub extends: Vec<String>,

    /// Rule overrides, keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// Options handed to the commit message parser.
    #[serde(default)]
    pub parser_preset: ParserPreset,

    /// Link shown to users when linting fails.
    #[serde(default)]
    pub help_url: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        super::default::project_config()
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config().map(|(config, _)| config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Typed view of the `type-enum` rule.
    ///
    /// Returns `Ok(None)` when the rule is not configured, and an
    /// `InvalidValue` error when it is configured but not shaped as
    /// `[level, applicability, [types...]]`.
    pub fn type_enum(&self) -> Result<Option<TypeEnum>> {
        let Some(rule) = self.rules.get(TYPE_ENUM) else {
            return Ok(None);
        };

        let invalid = |message: &str| ConfigError::InvalidValue {
            key: format!("rules.{}", TYPE_ENUM),
            message: message.to_string(),
        };

        let applicability = rule
            .applicability
            .ok_or_else(|| invalid("missing applicability (\"always\" or \"never\")"))?;

        let values = rule
            .value
            .as_ref()
            .and_then(|v| v.as_array())
            .ok_or_else(|| invalid("expected a list of allowed types"))?;

        let allowed = values
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid("allowed types must be strings"))?;

        Ok(Some(TypeEnum {
            severity: rule.severity,
            applicability,
            allowed,
        }))
    }
}

/// Rule severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Level 0: the rule is off.
    Disabled,
    /// Level 1: violations are reported but do not fail.
    Warning,
    /// Level 2: violations fail the lint.
    Error,
}

impl Severity {
    /// Numeric level as written in the document.
    pub fn level(self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Map a numeric level back to a severity.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Disabled => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let level = u8::deserialize(deserializer)?;
        Severity::from_level(level).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid severity level {} (expected 0, 1 or 2)",
                level
            ))
        })
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule entry: `[level]`, `[level, applicability]` or
/// `[level, applicability, value]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    pub severity: Severity,
    pub applicability: Option<Applicability>,
    pub value: Option<serde_json::Value>,
}

impl RuleConfig {
    /// A fully specified rule.
    pub fn new(
        severity: Severity,
        applicability: Applicability,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            severity,
            applicability: Some(applicability),
            value: Some(value.into()),
        }
    }

    /// A rule that only sets a level, e.g. `[0]` to switch it off.
    pub fn level(severity: Severity) -> Self {
        Self {
            severity,
            applicability: None,
            value: None,
        }
    }

    /// Attach an applicability without a value.
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = Some(applicability);
        self
    }

    fn arity(&self) -> usize {
        1 + usize::from(self.applicability.is_some()) + usize::from(self.value.is_some())
    }
}

impl Serialize for RuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.value.is_some() && self.applicability.is_none() {
            return Err(ser::Error::custom(
                "rule value requires an applicability",
            ));
        }

        let mut seq = serializer.serialize_seq(Some(self.arity()))?;
        seq.serialize_element(&self.severity)?;
        if let Some(applicability) = &self.applicability {
            seq.serialize_element(applicability)?;
        }
        if let Some(value) = &self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(RuleConfigVisitor)
    }
}

struct RuleConfigVisitor;

impl<'de> Visitor<'de> for RuleConfigVisitor {
    type Value = RuleConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rule array [level, applicability, value]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<RuleConfig, A::Error> {
        let severity: Severity = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let applicability: Option<Applicability> = seq.next_element()?;

        let value = match applicability {
            Some(_) => seq.next_element::<serde_json::Value>()?,
            None => None,
        };

        if value.is_some() && seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }

        Ok(RuleConfig {
            severity,
            applicability,
            value,
        })
    }
}

/// Parser preset wrapper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserPreset {
    #[serde(default)]
    pub parser_opts: ParserOpts,
}

/// Options for the commit message parser.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserOpts {
    /// Prefixes that introduce an issue reference, e.g. `#`.
    #[serde(default)]
    pub issue_prefixes: Vec<String>,
    /// Match prefixes exactly as written. Off by default, so `GH-` also
    /// picks up `gh-12`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub issue_prefixes_case_sensitive: bool,
}

/// Typed view of a `type-enum` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    pub severity: Severity,
    pub applicability: Applicability,
    /// Allowed (or, under `never`, forbidden) type tokens in display order.
    pub allowed: Vec<String>,
}

impl TypeEnum {
    /// Whether `token` is one of the listed values.
    pub fn contains(&self, token: &str) -> bool {
        self.allowed.iter().any(|t| t == token)
    }
}

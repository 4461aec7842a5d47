// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! What the `type-enum` parameters mean for a given type token.

use crate::config::{Applicability, Severity, TypeEnum};
use crate::error::{Result, ValidationError};

/// Outcome of looking a type token up in `type-enum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeVerdict {
    /// The token satisfies the rule.
    Accepted,
    /// The rule is switched off.
    Ignored,
    /// The token violates the rule at the given severity.
    Rejected { severity: Severity },
}

impl TypeVerdict {
    /// Whether a linter using these parameters would fail the commit.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TypeVerdict::Rejected {
                severity: Severity::Error
            }
        )
    }
}

impl TypeEnum {
    /// Decide whether `token` passes this rule.
    ///
    /// Matching is exact and case-sensitive. An empty token always passes
    /// here; empty types belong to the preset's `type-empty` rule.
    pub fn evaluate(&self, token: &str) -> TypeVerdict {
        if self.severity == Severity::Disabled {
            return TypeVerdict::Ignored;
        }
        if token.is_empty() {
            return TypeVerdict::Accepted;
        }

        let listed = self.contains(token);
        let passes = match self.applicability {
            Applicability::Always => listed,
            Applicability::Never => !listed,
        };

        if passes {
            TypeVerdict::Accepted
        } else {
            TypeVerdict::Rejected {
                severity: self.severity,
            }
        }
    }

    /// Like [`TypeEnum::evaluate`], but an error-level rejection is an `Err`.
    ///
    /// Under `never` the listed values are the forbidden ones, and the error
    /// says so.
    pub fn require(&self, token: &str) -> Result<TypeVerdict> {
        let verdict = self.evaluate(token);
        if !verdict.is_failure() {
            return Ok(verdict);
        }

        let listed = self.allowed.join(", ");
        let err = match self.applicability {
            Applicability::Always => ValidationError::TypeRejected {
                token: token.to_string(),
                allowed: listed,
            },
            Applicability::Never => ValidationError::TypeForbidden {
                token: token.to_string(),
                forbidden: listed,
            },
        };
        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default::ALLOWED_TYPES;
    use crate::config::LintConfig;

    fn project_type_enum() -> TypeEnum {
        LintConfig::default().type_enum().unwrap().unwrap()
    }

    #[test]
    fn test_feat_accepted() {
        assert_eq!(project_type_enum().evaluate("feat"), TypeVerdict::Accepted);
    }

    #[test]
    fn test_every_listed_type_accepted() {
        let type_enum = project_type_enum();
        for token in ALLOWED_TYPES {
            assert_eq!(type_enum.evaluate(token), TypeVerdict::Accepted, "{}", token);
        }
    }

    #[test]
    fn test_wip_rejected_at_error() {
        let verdict = project_type_enum().evaluate("wip");
        assert_eq!(
            verdict,
            TypeVerdict::Rejected {
                severity: Severity::Error
            }
        );
        assert!(verdict.is_failure());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(project_type_enum().evaluate("Feat").is_failure());
    }

    #[test]
    fn test_empty_token_left_to_type_empty() {
        assert_eq!(project_type_enum().evaluate(""), TypeVerdict::Accepted);
    }

    #[test]
    fn test_never_inverts() {
        let type_enum = TypeEnum {
            severity: Severity::Warning,
            applicability: Applicability::Never,
            allowed: vec!["wip".to_string()],
        };
        assert_eq!(
            type_enum.evaluate("wip"),
            TypeVerdict::Rejected {
                severity: Severity::Warning
            }
        );
        assert!(!type_enum.evaluate("wip").is_failure());
        assert_eq!(type_enum.evaluate("feat"), TypeVerdict::Accepted);
    }

    #[test]
    fn test_disabled_ignores() {
        let type_enum = TypeEnum {
            severity: Severity::Disabled,
            ..project_type_enum()
        };
        assert_eq!(type_enum.evaluate("wip"), TypeVerdict::Ignored);
    }

    #[test]
    fn test_require() {
        let type_enum = project_type_enum();
        assert!(type_enum.require("fix").is_ok());

        let err = type_enum.require("wip").unwrap_err();
        assert!(err.to_string().contains("'wip'"));
        assert!(err.to_string().contains("fix, feat, docs"));
    }

    #[test]
    fn test_require_never_reports_forbidden() {
        let type_enum = TypeEnum {
            severity: Severity::Error,
            applicability: Applicability::Never,
            allowed: vec!["wip".to_string()],
        };
        assert!(type_enum.require("feat").is_ok());

        let err = type_enum.require("wip").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("must not be one of: wip"));
        assert!(!message.contains("allowed"));
        assert!(matches!(
            err,
            crate::error::CommitrcError::Validation(ValidationError::TypeForbidden { .. })
        ));
    }
}

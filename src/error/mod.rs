// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitrc.
//!
//! Errors are grouped by the area that raises them: loading and shaping the
//! configuration document, and auditing or querying it.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitrc operations.
#[derive(Error, Debug)]
pub enum CommitrcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Failed to serialize configuration: {message}")]
    SerializeError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised when a document or a token does not pass.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Configuration audit failed: {count} issues found")]
    Failed { count: usize },

    #[error("Commit type '{token}' is not allowed (allowed: {allowed})")]
    TypeRejected { token: String, allowed: String },

    #[error("Commit type '{token}' is forbidden (must not be one of: {forbidden})")]
    TypeForbidden { token: String, forbidden: String },
}

/// Result type alias for commitrc operations.
pub type Result<T> = std::result::Result<T, CommitrcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitrcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/.commitlintrc.json"),
        };
        assert!(err.to_string().contains("/path/to/.commitlintrc.json"));
    }

    #[test]
    fn test_type_rejected_display() {
        let err = ValidationError::TypeRejected {
            token: "wip".to_string(),
            allowed: "fix, feat".to_string(),
        };
        assert!(err.to_string().contains("'wip'"));
        assert!(err.to_string().contains("fix, feat"));
    }

    #[test]
    fn test_type_forbidden_display() {
        let err = ValidationError::TypeForbidden {
            token: "wip".to_string(),
            forbidden: "wip, tmp".to_string(),
        };
        assert!(err.to_string().contains("must not be one of: wip, tmp"));
        assert!(!err.to_string().contains("allowed"));
    }

    #[test]
    fn test_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.type-enum".to_string(),
            message: "expected a list of strings".to_string(),
        };
        let err: CommitrcError = config_err.into();
        assert!(err.to_string().contains("rules.type-enum"));
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.context("init").unwrap_err();
        assert_eq!(err.to_string(), "init: denied");
    }
}

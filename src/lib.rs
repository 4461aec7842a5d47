// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitrc - Commit-lint configuration toolkit
//!
//! Owns the commit-lint document of a project: the preset it extends, the
//! allowed commit types, the issue prefixes and the help link.
//!
//! # Features
//!
//! - **Typed Document**: `.commitlintrc.json` / `commitlint.toml` as Rust types
//! - **Audit**: Catch empty type lists, duplicate types and broken links early
//! - **Parameter Lookup**: See how a type token or an issue reference is read
//!
//! # Example
//!
//! ```no_run
//! use commitrc::config::LintConfig;
//!
//! let config = LintConfig::load().unwrap();
//!
//! if let Some(type_enum) = config.type_enum().unwrap() {
//!     println!("wip: {:?}", type_enum.evaluate("wip"));
//! }
//! ```

// Module declarations
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpret;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CommitrcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitrc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}

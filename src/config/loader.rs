// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery, loading and serialization.

use crate::error::{CommitrcError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    ".commitlintrc.json",
    ".commitlintrc",
    "commitlint.config.json",
    ".commitlintrc.toml",
    "commitlint.toml",
];

/// On-disk encoding of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }

    /// File name `init` writes for this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ConfigFormat::Json => ".commitlintrc.json",
            ConfigFormat::Toml => "commitlint.toml",
        }
    }
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    find_config_file_in(start_dir, dirs::config_dir().as_deref())
}

/// Walk up from `start_dir`, then fall back to the user file under
/// `user_config_dir`.
fn find_config_file_in(start_dir: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    user_config_dir.and_then(user_config_file)
}

/// `<config_dir>/commitrc/config.toml`, if it exists.
fn user_config_file(config_dir: &Path) -> Option<PathBuf> {
    let path = config_dir.join("commitrc").join("config.toml");
    path.is_file().then_some(path)
}

/// Load configuration from the default locations.
///
/// Also returns the file it came from; `None` means no file was found and
/// the project document is in use.
pub fn load_config() -> Result<(LintConfig, Option<PathBuf>)> {
    match find_config_file() {
        Some(path) => {
            let config = load_config_from(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            tracing::debug!("No configuration file found, using project defaults");
            Ok((LintConfig::default(), None))
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CommitrcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CommitrcError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse configuration from a string in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LintConfig> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            CommitrcError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        }),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CommitrcError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        }),
    }
}

/// Serialize configuration in the given format.
pub fn render_config(config: &LintConfig, format: ConfigFormat) -> Result<String> {
    let rendered = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::to_string(config).map_err(|e| e.to_string()),
    };

    rendered.map_err(|message| CommitrcError::Config(ConfigError::SerializeError { message }))
}

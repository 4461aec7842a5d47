// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigFormat;

/// commitrc - commit-lint configuration toolkit
///
/// Prints, writes, audits and queries the commit-lint document.
#[derive(Parser, Debug)]
#[command(name = "commitrc")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit-lint configuration toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMITRC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Document encoding accepted by `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Encoding {
    /// `.commitlintrc.json` style (default)
    Json,
    /// `commitlint.toml` style
    Toml,
}

impl From<Encoding> for ConfigFormat {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Json => ConfigFormat::Json,
            Encoding::Toml => ConfigFormat::Toml,
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the loaded configuration
    Show(ShowArgs),

    /// Audit the configuration for mistakes
    Validate(ValidateArgs),

    /// Write the project configuration file
    Init(InitArgs),

    /// List the allowed commit types
    Types,

    /// Check a commit type against type-enum
    CheckType(CheckTypeArgs),

    /// List issue references found in some text
    Refs(RefsArgs),

    /// Print version information
    Version,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Encoding to print the document in
    #[arg(long = "as", value_enum)]
    pub encoding: Option<Encoding>,
}

/// Arguments for the validate command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ValidateArgs {
    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Encoding of the written file
    #[arg(long = "as", value_enum)]
    pub encoding: Option<Encoding>,
}

/// Arguments for the check-type command.
#[derive(Parser, Debug, Clone)]
pub struct CheckTypeArgs {
    /// Commit type token, e.g. `feat`
    pub token: String,
}

/// Arguments for the refs command.
#[derive(Parser, Debug, Clone)]
pub struct RefsArgs {
    /// Text to scan, typically a commit message
    pub text: String,
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitrc.
//!
//! This module holds the commit-lint document: its schema, the project's
//! canonical values, and loading/serialization from JSON or TOML files.

pub mod default;
mod loader;
mod schema;

pub use default::project_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    render_config, ConfigFormat,
};
pub use schema::*;

// SPDX-License-Identifier: MPL-2.0
//! This module handles the tool's configuration, loaded from a `settings.toml`
//! file. Command-line flags take precedence over every value here.
//!
//! # Examples
//!
//! ```no_run
//! use photo_extent::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.filtered_folder = Some(PathBuf::from("/photos/filtered"));
//!
//! // Save to a specific path
//! config::save_to_path(&config, &PathBuf::from("./settings.toml"))
//!     .expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhotoExtent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source_folder: Option<PathBuf>,
    #[serde(default)]
    pub filtered_folder: Option<PathBuf>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_quarantine")]
    pub quarantine: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_folder: None,
            filtered_folder: None,
            extensions: default_extensions(),
            quarantine: DEFAULT_QUARANTINE,
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_quarantine() -> bool {
    DEFAULT_QUARANTINE
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads the configuration at `path`. Unparsable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "ignoring invalid config {}: {}",
                path.display(),
                err.message()
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

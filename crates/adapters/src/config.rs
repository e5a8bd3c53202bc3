// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from loading adapter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Message sender settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Name of the sender, for diagnostics
    pub name: String,
    /// Longest delay accepted by the delayed-send path
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            name: "in-memory".to_string(),
            // queue transports commonly cap delayed delivery at 15 minutes
            max_delay: Duration::from_secs(900),
        }
    }
}

/// File store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Directory the store keeps its files under
    pub root: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("satchel-data"),
        }
    }
}

/// Top-level adapter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub sender: SenderConfig,
    #[serde(default)]
    pub file_store: FileStoreConfig,
}

impl AdapterConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Parse configuration from a TOML string
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

//! Global configuration management
//!
//! Reads optional settings from `config.toml` in the config directory:
//! the default remote repository, the local repository root, and the Maven
//! executable.

use crate::infra::dirs::MvnfetchDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for mvnfetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Remote repository base URL
    pub repository: Option<String>,

    /// Local repository root
    pub local_repository: Option<PathBuf>,

    /// Maven executable name or path
    pub maven_command: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `GlobalConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &MvnfetchDirs) -> Result<Self, GlobalConfigError> {
        let config_path = dirs.global_config_path();
        Self::load_from_path(&config_path)
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective remote repository URL
    ///
    /// Returns the custom URL if set, otherwise Maven Central.
    #[must_use]
    pub fn repository_url(&self) -> &str {
        self.repository
            .as_deref()
            .unwrap_or(crate::config::urls::MAVEN_CENTRAL)
    }

    /// Get the effective Maven executable
    #[must_use]
    pub fn maven_command(&self) -> &str {
        self.maven_command
            .as_deref()
            .unwrap_or(crate::config::defaults::MAVEN_COMMAND)
    }
}

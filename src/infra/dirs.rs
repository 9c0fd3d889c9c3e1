//! Platform-specific directory management
//!
//! Provides the config directory and the default local Maven repository.
//!
//! Environment variables can override default directories:
//! - `MVNFETCH_CONFIG_DIR` - Override config directory
//! - `MVNFETCH_LOCAL_REPOSITORY` - Override the local repository root

use std::env;
use std::path::PathBuf;

use crate::config::defaults::LOCAL_REPOSITORY_SUBDIR;

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "MVNFETCH_CONFIG_DIR";
pub const ENV_LOCAL_REPOSITORY: &str = "MVNFETCH_LOCAL_REPOSITORY";

/// Application name used in directory paths
const APP_NAME: &str = "mvnfetch";

/// Platform-specific directory provider for mvnfetch
#[derive(Debug, Clone)]
pub struct MvnfetchDirs {
    config_dir: PathBuf,
    local_repository: Option<PathBuf>,
}

impl MvnfetchDirs {
    /// Create a new `MvnfetchDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            local_repository: env::var_os(ENV_LOCAL_REPOSITORY).map(PathBuf::from),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/mvnfetch` or `~/.config/mvnfetch`
    /// - macOS: `~/Library/Application Support/mvnfetch`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Local repository root set through the environment, if any
    #[must_use]
    pub fn local_repository_override(&self) -> Option<PathBuf> {
        self.local_repository.clone()
    }

    /// Maven's conventional local repository, `~/.m2/repository`
    #[must_use]
    pub fn default_local_repository() -> PathBuf {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        LOCAL_REPOSITORY_SUBDIR
            .iter()
            .fold(base, |path, segment| path.join(segment))
    }

    /// Resolve config directory from environment or platform default
    fn resolve_config_dir() -> PathBuf {
        if let Some(path) = env::var_os(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for MvnfetchDirs {
    fn default() -> Self {
        Self::new()
    }
}

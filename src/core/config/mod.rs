//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$SNIPPETS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/snippets/config.toml`
//! 3. `~/.snippets/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use snippets_run::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Registry: {}", config.registry());
//! println!("Interpreter: {}", config.runtime().interpreter);
//! ```

pub mod schema;

pub use schema::{validate_registry, FileConfig, RuntimeConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::runtime::RuntimeProfile;
use crate::registry::DEFAULT_REGISTRY;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SNIPPETS_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub file: FileConfig,
    /// Path the config was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locate the first existing config file.
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $SNIPPETS_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/snippets/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("snippets/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.snippets/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".snippets/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the registry base URL.
    ///
    /// Defaults to [`DEFAULT_REGISTRY`] if not configured.
    pub fn registry(&self) -> &str {
        self.file.registry.as_deref().unwrap_or(DEFAULT_REGISTRY)
    }

    /// Get the runtime profile with defaults filled in.
    pub fn runtime(&self) -> RuntimeProfile {
        let defaults = RuntimeProfile::default();
        let Some(runtime) = &self.file.runtime else {
            return defaults;
        };

        RuntimeProfile {
            tag: runtime.tag.clone().unwrap_or(defaults.tag),
            interpreter: runtime.interpreter.clone().unwrap_or(defaults.interpreter),
            extension: runtime.extension.clone().unwrap_or(defaults.extension),
        }
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

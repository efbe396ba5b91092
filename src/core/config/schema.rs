//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$SNIPPETS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/snippets/config.toml`
//! 3. `~/.snippets/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing: the registry must be an http(s) URL
//! and runtime fields must be usable as a path segment or file extension.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// registry = "https://registry.snippets.run"
///
/// [runtime]
/// tag = "node"
/// interpreter = "node"
/// extension = "mjs"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Registry base URL
    pub registry: Option<String>,

    /// Runtime the snippets are written for
    pub runtime: Option<RuntimeConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(registry) = &self.registry {
            validate_registry(registry)?;
        }

        if let Some(runtime) = &self.runtime {
            runtime.validate()?;
        }

        Ok(())
    }
}

/// Check that a registry base URL is usable.
pub fn validate_registry(registry: &str) -> Result<(), ConfigError> {
    if !(registry.starts_with("http://") || registry.starts_with("https://")) {
        return Err(ConfigError::InvalidValue(format!(
            "registry must be an http:// or https:// URL, got '{}'",
            registry
        )));
    }
    Ok(())
}

/// Runtime overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Registry path segment (`/s/<tag>/<name>`)
    pub tag: Option<String>,

    /// Executable that runs the materialized script
    pub interpreter: Option<String>,

    /// Extension of the materialized script
    pub extension: Option<String>,
}

impl RuntimeConfig {
    /// Validate the runtime configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tag", &self.tag),
            ("interpreter", &self.interpreter),
            ("extension", &self.extension),
        ] {
            if let Some(v) = value {
                if v.is_empty() {
                    return Err(ConfigError::InvalidValue(format!(
                        "runtime.{} cannot be empty",
                        field
                    )));
                }
            }
        }

        for (field, value) in [("tag", &self.tag), ("extension", &self.extension)] {
            if let Some(v) = value {
                if v.contains('/') {
                    return Err(ConfigError::InvalidValue(format!(
                        "runtime.{} cannot contain '/': '{}'",
                        field, v
                    )));
                }
            }
        }

        Ok(())
    }
}

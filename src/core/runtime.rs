//! core::runtime
//!
//! The runtime a snippet is written for.
//!
//! The registry serves snippets per runtime tag, and a materialized script
//! runs under that runtime's interpreter. The defaults target Node.js ES
//! modules.

/// Default registry path segment.
pub const DEFAULT_TAG: &str = "node";

/// Default interpreter executable.
pub const DEFAULT_INTERPRETER: &str = "node";

/// Default script file extension.
pub const DEFAULT_EXTENSION: &str = "mjs";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProfile {
    /// Registry path segment (`/s/<tag>/<name>`)
    pub tag: String,
    /// Executable the script is passed to
    pub interpreter: String,
    /// Extension of the materialized script
    pub extension: String,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

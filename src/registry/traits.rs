//! registry::traits
//!
//! Registry trait definition for fetching snippet definitions.
//!
//! # Design
//!
//! The `SnippetRegistry` trait is async because fetching involves network
//! I/O. A fetch is a single attempt; callers never retry.
//!
//! # Example
//!
//! ```ignore
//! use snippets_run::registry::{SnippetRegistry, RegistryError};
//!
//! async fn show(registry: &dyn SnippetRegistry) -> Result<(), RegistryError> {
//!     let snippet = registry.fetch("hello").await?;
//!     println!("{} parameters", snippet.inputs.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::snippet::SnippetDefinition;

/// Errors from registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry answered with a non-success status.
    #[error("registry error: {status} {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Status text (e.g. "Not Found")
        message: String,
    },

    /// The response body is not a snippet definition.
    #[error("registry error: invalid snippet body: {0}")]
    Decode(String),

    /// The registry could not be reached.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Source of snippet definitions.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait SnippetRegistry: Send + Sync {
    /// Get the registry name (for logging).
    fn name(&self) -> &'static str;

    /// Fetch the definition of snippet `name`.
    ///
    /// The name is arbitrary user text and is not validated.
    async fn fetch(&self, name: &str) -> Result<SnippetDefinition, RegistryError>;
}

//! registry::mock
//!
//! Mock registry implementation for deterministic testing.
//!
//! # Design
//!
//! The mock registry serves snippets from memory, records every fetch, and
//! can be configured to fail.
//!
//! # Example
//!
//! ```
//! use snippets_run::core::snippet::{ParameterSpec, SnippetDefinition};
//! use snippets_run::registry::mock::MockRegistry;
//! use snippets_run::registry::SnippetRegistry;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let registry = MockRegistry::new().with_snippet(
//!     "greet",
//!     SnippetDefinition {
//!         script: "echo ${name}".to_string(),
//!         inputs: vec![ParameterSpec::new("name")],
//!     },
//! );
//!
//! let snippet = registry.fetch("greet").await.unwrap();
//! assert_eq!(snippet.inputs.len(), 1);
//! assert_eq!(registry.fetched(), ["greet"]);
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{RegistryError, SnippetRegistry};
use crate::core::snippet::SnippetDefinition;

/// Mock registry for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    inner: Arc<Mutex<MockRegistryInner>>,
}

#[derive(Debug, Default)]
struct MockRegistryInner {
    /// Stored snippets by name.
    snippets: HashMap<String, SnippetDefinition>,
    /// Error returned by every fetch, if set.
    fail_with: Option<RegistryError>,
    /// Names fetched, in order.
    fetched: Vec<String>,
}

impl MockRegistry {
    /// Create a new empty mock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snippet served under `name`.
    pub fn with_snippet(self, name: impl Into<String>, snippet: SnippetDefinition) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.snippets.insert(name.into(), snippet);
        }
        self
    }

    /// Make every fetch fail with `error`.
    pub fn fail_with(self, error: RegistryError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_with = Some(error);
        }
        self
    }

    /// Names fetched so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.inner.lock().unwrap().fetched.clone()
    }
}

#[async_trait]
impl SnippetRegistry for MockRegistry {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, name: &str) -> Result<SnippetDefinition, RegistryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetched.push(name.to_string());

        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }

        inner
            .snippets
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_snippet_is_not_found() {
        let registry = MockRegistry::new();

        let err = registry.fetch("missing").await.unwrap_err();

        assert_eq!(
            err,
            RegistryError::Status {
                status: 404,
                message: "Not Found".to_string()
            }
        );
        assert_eq!(registry.fetched(), ["missing"]);
    }

    #[tokio::test]
    async fn fail_with_overrides_snippets() {
        let registry = MockRegistry::new()
            .with_snippet(
                "x",
                SnippetDefinition {
                    script: String::new(),
                    inputs: vec![],
                },
            )
            .fail_with(RegistryError::Transport("down".to_string()));

        let err = registry.fetch("x").await.unwrap_err();
        assert!(matches!(err, RegistryError::Transport(_)));
    }
}

//! core::snippet
//!
//! Snippet definitions as served by the registry.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "script": "echo ${name}",
//!   "inputs": [{ "name": "name", "description": "Who to greet" }]
//! }
//! ```
//!
//! `inputs` may be missing or `null`; both mean no parameters.

use serde::{Deserialize, Deserializer, Serialize};

/// A snippet's script body and its declared parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDefinition {
    /// Script template text
    pub script: String,

    /// Declared parameters, in declaration order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inputs: Vec<ParameterSpec>,
}

impl SnippetDefinition {
    /// Names of all declared parameters, in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|p| p.name.as_str())
    }
}

/// One substitution slot declared by a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Identifier, unique within a definition
    pub name: String,

    /// Human-readable description shown when prompting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterSpec {
    /// Create a parameter with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Text used to label the interactive prompt.
    ///
    /// An empty description falls back to the name.
    pub fn label(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => &self.name,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ParameterSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ParameterSpec>>::deserialize(deserializer)?.unwrap_or_default())
}

//! registry::http
//!
//! HTTP registry implementation.
//!
//! # Contract
//!
//! ```text
//! GET <base>/s/<runtime-tag>/<snippet-name>
//! Accept: application/json
//! ```
//!
//! A 2xx answer must carry a JSON [`SnippetDefinition`]. Any other status
//! fails with [`RegistryError::Status`] carrying the status text. Nothing is
//! retried.
//!
//! # Example
//!
//! ```no_run
//! use snippets_run::registry::{HttpRegistry, SnippetRegistry};
//!
//! # async fn demo() -> Result<(), snippets_run::registry::RegistryError> {
//! let registry = HttpRegistry::new("https://registry.snippets.run", "node");
//! let snippet = registry.fetch("hello-world").await?;
//! println!("{}", snippet.script);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};

use super::traits::{RegistryError, SnippetRegistry};
use crate::core::snippet::SnippetDefinition;

/// User-Agent header value for registry requests.
const USER_AGENT_VALUE: &str = "snippets-run";

/// Registry reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    /// HTTP client for making requests
    client: Client,
    /// Base URL, without trailing slash
    base: String,
    /// Runtime tag path segment
    tag: String,
}

impl HttpRegistry {
    /// Create a registry client for `base` serving snippets for `tag`.
    pub fn new(base: impl Into<String>, tag: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
            tag: tag.into(),
        }
    }

    /// The base URL requests are made against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build the URL for a snippet.
    ///
    /// The name is appended verbatim.
    pub fn snippet_url(&self, name: &str) -> String {
        format!("{}/s/{}/{}", self.base, self.tag, name)
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }

    /// Map a response to a definition or a status error.
    async fn handle_response(response: Response) -> Result<SnippetDefinition, RegistryError> {
        let status = response.status();

        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| RegistryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SnippetRegistry for HttpRegistry {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, name: &str) -> Result<SnippetDefinition, RegistryError> {
        let url = self.snippet_url(name);
        tracing::debug!(%url, "fetching snippet");

        let response = self
            .client
            .get(&url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        tracing::debug!(status = response.status().as_u16(), "registry responded");
        Self::handle_response(response).await
    }
}

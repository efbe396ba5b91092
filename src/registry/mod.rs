//! registry
//!
//! Abstraction for the snippet registry.
//!
//! # Architecture
//!
//! The `SnippetRegistry` trait defines how snippet definitions are fetched.
//! The pipeline only sees the trait; the CLI wires in [`HttpRegistry`].
//!
//! # Modules
//!
//! - `traits`: Core `SnippetRegistry` trait and `RegistryError`
//! - [`http`]: HTTP implementation using reqwest
//! - [`mock`]: Mock implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpRegistry;
pub use traits::*;

/// Default registry base URL.
///
/// Also exported to executed scripts as [`REGISTRY_ENV`].
pub const DEFAULT_REGISTRY: &str = "https://registry.snippets.run";

/// Environment variable carrying the registry base URL to executed scripts.
pub const REGISTRY_ENV: &str = "SNIPPETS_REGISTRY";

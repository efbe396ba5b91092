//! core
//!
//! Core domain types and pure transformations for snippet runs.
//!
//! # Modules
//!
//! - [`snippet`] - Snippet definitions as served by the registry
//! - [`options`] - Named options and pass-through arguments from the invocation
//! - [`inputs`] - Resolved parameter values in declaration order
//! - [`template`] - Placeholder substitution
//! - [`cache`] - Deterministic script cache paths and writes
//! - [`runtime`] - Runtime profile (registry tag, interpreter, extension)
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing here performs network I/O or spawns processes
//! - Every transformation is deterministic for a given input

pub mod cache;
pub mod config;
pub mod inputs;
pub mod options;
pub mod runtime;
pub mod snippet;
pub mod template;

//! snippets-run - fetch, parameterize, and run registry-hosted script snippets
//!
//! Given a snippet name, `run` fetches the script and its declared inputs
//! from the registry, resolves a value for every input, substitutes them
//! into the script, writes the result to a deterministic cache path, and
//! executes it with the caller's terminal and environment.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Fetch -> Resolve -> Substitute -> Materialize -> Run
//! - [`core`] - Domain types, options parsing, templating, cache paths, config
//! - [`registry`] - Abstraction over the snippet registry (HTTP v1)
//! - [`ui`] - Prompts and user-facing output
//!
//! # Input Precedence
//!
//! For every declared input, first match wins:
//!
//! 1. A `--<input> <value>` flag after the snippet name
//! 2. Empty string if stdin is piped
//! 3. An interactive prompt otherwise

pub mod cli;
pub mod core;
pub mod engine;
pub mod registry;
pub mod ui;

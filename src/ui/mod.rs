//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive prompts for snippet inputs
//! - [`output`] - Usage and error output
//!
//! # Design
//!
//! Everything the tool shows the user goes through this module. Output
//! produced by the executed script never does.

pub mod output;
pub mod prompts;

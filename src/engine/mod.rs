//! engine
//!
//! Orchestrates a snippet run: Fetch -> Resolve -> Substitute -> Materialize -> Run.
//!
//! # Architecture
//!
//! - [`resolve`] - Input resolution from options, piped stdin, or prompts
//! - [`exec`] - Child process spawning and exit status translation
//! - [`runner`] - The pipeline tying every stage together
//!
//! # Invariants
//!
//! - Every declared parameter has exactly one resolved value before
//!   substitution begins
//! - The script is written only after fetch, resolution and substitution
//!   have succeeded
//! - The library never exits the process; the exit code is returned

pub mod exec;
pub mod resolve;
pub mod runner;

pub use exec::{child_env, exit_code, run_script, RunError};
pub use resolve::InputResolver;
pub use runner::{prepare, run};

use crate::core::cache::{CacheError, ScriptCache};
use crate::core::runtime::RuntimeProfile;
use crate::core::template::TemplateError;
use crate::registry::RegistryError;
use crate::ui::prompts::PromptError;

/// Execution context for a run.
///
/// Contains settings derived from config, CLI flags and the environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Stdin is piped; never prompt.
    pub piped: bool,
    /// Registry base URL.
    pub registry: String,
    /// Runtime the snippet targets.
    pub runtime: RuntimeProfile,
    /// Where materialized scripts are written.
    pub cache: ScriptCache,
}

/// Errors from the pipeline.
///
/// Every variant is terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Run(#[from] RunError),
}

#[cfg(test)]
mod tests {
    use super::*;

    mod pipeline_error {
        use super::*;

        #[test]
        fn display_is_transparent() {
            let err = PipelineError::from(RegistryError::Status {
                status: 404,
                message: "Not Found".to_string(),
            });
            assert_eq!(err.to_string(), "registry error: 404 Not Found");

            let err = PipelineError::from(RegistryError::Transport("dns failure".to_string()));
            assert_eq!(err.to_string(), "transport error: dns failure");
        }
    }
}

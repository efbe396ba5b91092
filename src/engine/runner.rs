//! engine::runner
//!
//! The snippet pipeline: fetch, resolve, substitute, materialize, run.
//!
//! # Lifecycle
//!
//! ```text
//! Fetch -> Resolve -> Substitute -> Materialize -> Run
//! ```
//!
//! Data flows strictly forward. The pipeline blocks on the registry fetch
//! and on each interactive prompt. Nothing runs in parallel.
//!
//! # Example
//!
//! ```ignore
//! use snippets_run::engine::{run, Context};
//! use snippets_run::registry::HttpRegistry;
//! use snippets_run::ui::prompts::StdTerminal;
//!
//! let registry = HttpRegistry::new(&ctx.registry, &ctx.runtime.tag);
//! let code = run(&ctx, &registry, &mut StdTerminal, "hello", &options).await?;
//! std::process::exit(code);
//! ```

use std::path::PathBuf;

use super::exec::{child_env, run_script};
use super::resolve::InputResolver;
use super::{Context, PipelineError};
use crate::core::options::InvocationOptions;
use crate::core::template::substitute;
use crate::registry::SnippetRegistry;
use crate::ui::prompts::Terminal;

/// Fetch snippet `name`, resolve its inputs, and write the script.
///
/// Returns the path of the materialized script. Nothing is written if any
/// earlier step fails.
pub async fn prepare<R, T>(
    ctx: &Context,
    registry: &R,
    terminal: &mut T,
    name: &str,
    options: &InvocationOptions,
) -> Result<PathBuf, PipelineError>
where
    R: SnippetRegistry + ?Sized,
    T: Terminal,
{
    let snippet = registry.fetch(name).await?;
    tracing::debug!(
        registry = registry.name(),
        snippet = name,
        inputs = snippet.inputs.len(),
        "fetched snippet"
    );

    let resolved = InputResolver::new(ctx.piped).resolve(&snippet.inputs, options, terminal)?;
    tracing::debug!(
        names = ?resolved.names().collect::<Vec<_>>(),
        "resolved inputs"
    );

    let script = substitute(&snippet.script, &resolved)?;

    let path = ctx.cache.write(name, &ctx.runtime.extension, &script)?;
    tracing::debug!(path = %path.display(), "materialized script");

    Ok(path)
}

/// Run snippet `name` end to end.
///
/// Returns the child's exit code.
pub async fn run<R, T>(
    ctx: &Context,
    registry: &R,
    terminal: &mut T,
    name: &str,
    options: &InvocationOptions,
) -> Result<i32, PipelineError>
where
    R: SnippetRegistry + ?Sized,
    T: Terminal,
{
    let path = prepare(ctx, registry, terminal, name, options).await?;
    let env = child_env(&ctx.registry, std::env::vars_os());
    let code = run_script(&ctx.runtime.interpreter, &path, options.positional(), &env)?;
    Ok(code)
}

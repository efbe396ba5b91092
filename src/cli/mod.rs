//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Load configuration and build the run [`Context`]
//! - Turn the pipeline outcome into an exit code
//!
//! # Exit Codes
//!
//! - `--help` / `--version`: exit 0
//! - Invalid global flags: clap's message on stderr, exit 1
//! - No snippet name: usage text, exit 1
//! - Pipeline failure (config, fetch, prompt, write, spawn): `error: ...` on
//!   stderr, exit 1
//! - Otherwise: the script's own exit code

pub mod args;

pub use args::Cli;

use crate::core::cache::ScriptCache;
use crate::core::config::{validate_registry, Config};
use crate::core::options::InvocationOptions;
use crate::engine::{self, Context};
use crate::registry::HttpRegistry;
use crate::ui::output;
use crate::ui::prompts::StdTerminal;
use anyhow::{Context as _, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for failures inside the tool itself.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the exit
/// code for the process.
pub fn run() -> i32 {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Best effort; the exit code carries the outcome.
            let _ = err.print();
            return parse_exit_code(&err);
        }
    };
    init_logging(cli.debug);

    let Some(name) = cli.snippet_name() else {
        output::usage();
        return FAILURE_EXIT_CODE;
    };

    match run_snippet(&cli, name) {
        Ok(code) => code,
        Err(err) => {
            output::error(output::format_error(&err));
            FAILURE_EXIT_CODE
        }
    }
}

/// Exit code for a clap parse outcome.
///
/// Help and version output succeed; every usage error is a tool failure.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        FAILURE_EXIT_CODE
    } else {
        0
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "snippets_run=debug" } else { "warn" };

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Build the run context from config, flags, and the environment.
fn build_context(cli: &Cli, config: &Config) -> Result<Context> {
    let registry = match &cli.registry {
        Some(url) => {
            validate_registry(url)?;
            url.clone()
        }
        None => config.registry().to_string(),
    };

    Ok(Context {
        piped: args::stdin_is_piped(),
        registry,
        runtime: config.runtime(),
        cache: ScriptCache::from_env(),
    })
}

fn run_snippet(cli: &Cli, name: &str) -> Result<i32> {
    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let ctx = build_context(cli, &config)?;
    let options = InvocationOptions::parse(cli.tail());
    let registry = HttpRegistry::new(&ctx.registry, &ctx.runtime.tag);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let code = rt.block_on(engine::run(
        &ctx,
        &registry,
        &mut StdTerminal,
        name,
        &options,
    ))?;

    Ok(code)
}

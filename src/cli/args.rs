//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Recognized only before the snippet name:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--debug`: Enable debug logging
//! - `--registry <url>`: Override the registry base URL
//!
//! Everything after the snippet name is passed through untouched and
//! parsed by [`InvocationOptions`](crate::core::options::InvocationOptions).

use clap::Parser;
use std::io::IsTerminal;

/// Download and run a snippet from the registry
#[derive(Parser, Debug)]
#[command(name = "run")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Run a snippet, prompting for its inputs
    run hello-world

    # Supply inputs as flags instead of being prompted
    run hello-world --name world

    # Pass extra arguments through to the script
    run list-files ./src --depth 2")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Registry base URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Snippet name, then arguments and --input values for the snippet
    #[arg(
        value_name = "SNIPPET",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub invocation: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Help and version requests come back as errors too; see
    /// [`clap::Error::use_stderr`].
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }

    /// The snippet name, if one was given.
    ///
    /// An empty name counts as missing.
    pub fn snippet_name(&self) -> Option<&str> {
        self.invocation
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Everything after the snippet name.
    pub fn tail(&self) -> &[String] {
        self.invocation.get(1..).unwrap_or_default()
    }
}

/// Check whether stdin is piped rather than an interactive terminal.
pub fn stdin_is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

//! ui::output
//!
//! Messages the tool itself prints.
//!
//! # Design
//!
//! The executed script owns stdout and stderr once it starts, so the tool
//! prints only the usage text and a single error line.

use std::fmt::Display;

/// Usage text shown when no snippet name is given.
pub const USAGE: &str = "
How to use:
  run                                   Shows this message
  run <snippet-name> [args...]          Download and run <snippet-name>
  run <snippet-name> --<input> <value>  Supply an input instead of being prompted
";

/// Print the usage text to stdout.
pub fn usage() {
    println!("{}", USAGE);
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format an error chain as a single line.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

//! ui::prompts
//!
//! Interactive line prompts on the controlling terminal.
//!
//! # Design
//!
//! Terminal access is split in two:
//! - [`Terminal`] hands out a session; it is asked at most once per run.
//! - [`PromptSession`] asks questions and reads answers until dropped.
//!
//! Dropping the session releases the terminal. Callers keep the session in
//! a scope that ends on every exit path, including errors.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to open terminal: {0}")]
    Acquire(#[source] io::Error),

    #[error("failed to read answer for '{name}': {source}")]
    Read { name: String, source: io::Error },
}

/// An open terminal-reading session.
pub trait PromptSession {
    /// Show `question` and block until a line is read.
    ///
    /// The returned line has its trailing newline removed. End of input
    /// yields an empty string.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Source of prompt sessions.
pub trait Terminal {
    type Session: PromptSession;

    /// Open a session.
    fn acquire(&mut self) -> io::Result<Self::Session>;
}

/// Format the question shown for a parameter.
pub fn question(label: &str) -> String {
    format!("{}:\n> ", label)
}

/// Strip one trailing `\n` or `\r\n`.
pub fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Prompt session over any reader and writer.
#[derive(Debug)]
pub struct LineSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the session, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> PromptSession for LineSession<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.writer.write_all(question.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(trim_newline(line))
    }
}

/// The process's standard input and output.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    type Session = LineSession<StdinLock<'static>, Stdout>;

    fn acquire(&mut self) -> io::Result<Self::Session> {
        tracing::debug!("acquiring terminal session");
        Ok(LineSession::new(io::stdin().lock(), io::stdout()))
    }
}

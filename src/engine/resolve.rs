//! engine::resolve
//!
//! Resolve a value for every declared snippet parameter.
//!
//! # Precedence
//!
//! For each parameter, in declaration order, first match wins:
//! 1. A same-named invocation option (a bare flag counts as `"true"`)
//! 2. Piped stdin: the empty string, no prompt
//! 3. Otherwise: an interactive prompt on the terminal
//!
//! # Terminal Session
//!
//! The terminal is acquired lazily before the first prompt and shared by
//! all later prompts. It is released when resolution ends, whether it
//! succeeds or fails. If nothing needs a prompt it is never acquired.

use crate::core::inputs::ResolvedInputs;
use crate::core::options::InvocationOptions;
use crate::core::snippet::ParameterSpec;
use crate::ui::prompts::{self, PromptError, PromptSession, Terminal};

/// Resolves parameter values from options, piped input, or prompts.
#[derive(Debug, Clone, Copy)]
pub struct InputResolver {
    /// Whether stdin is piped (not a terminal).
    piped: bool,
}

impl InputResolver {
    /// Create a resolver.
    ///
    /// `piped` is true when stdin is not an interactive terminal.
    pub fn new(piped: bool) -> Self {
        Self { piped }
    }

    /// Resolve every parameter in `params`.
    ///
    /// The result has exactly one entry per parameter, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if the terminal cannot be opened or read.
    pub fn resolve<T: Terminal>(
        &self,
        params: &[ParameterSpec],
        options: &InvocationOptions,
        terminal: &mut T,
    ) -> Result<ResolvedInputs, PromptError> {
        let mut resolved = ResolvedInputs::new();
        let mut session = LazySession::new(terminal);

        for param in params {
            let value = if let Some(value) = options.get(&param.name) {
                tracing::debug!(parameter = %param.name, "resolved from option");
                value.as_str().to_string()
            } else if self.piped {
                tracing::debug!(parameter = %param.name, "stdin piped, resolved empty");
                String::new()
            } else {
                session.ask(param)?
            };

            resolved.insert(param.name.clone(), value);
        }

        Ok(resolved)
    }
}

/// Terminal session opened on first use and released on drop.
struct LazySession<'t, T: Terminal> {
    terminal: &'t mut T,
    session: Option<T::Session>,
}

impl<'t, T: Terminal> LazySession<'t, T> {
    fn new(terminal: &'t mut T) -> Self {
        Self {
            terminal,
            session: None,
        }
    }

    fn ask(&mut self, param: &ParameterSpec) -> Result<String, PromptError> {
        let session = match self.session {
            Some(ref mut session) => session,
            None => self
                .session
                .insert(self.terminal.acquire().map_err(PromptError::Acquire)?),
        };

        session
            .ask(&prompts::question(param.label()))
            .map_err(|source| PromptError::Read {
                name: param.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::io;
    use std::rc::Rc;

    /// Terminal that answers from a script and counts acquire/release.
    #[derive(Default)]
    struct ScriptedTerminal {
        answers: Rc<RefCell<VecDeque<io::Result<String>>>>,
        questions: Rc<RefCell<Vec<String>>>,
        acquired: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
        fail_acquire: bool,
    }

    impl ScriptedTerminal {
        fn answering(answers: &[&str]) -> Self {
            let terminal = Self::default();
            terminal
                .answers
                .borrow_mut()
                .extend(answers.iter().map(|a| Ok(a.to_string())));
            terminal
        }
    }

    struct ScriptedSession {
        answers: Rc<RefCell<VecDeque<io::Result<String>>>>,
        questions: Rc<RefCell<Vec<String>>>,
        released: Rc<Cell<usize>>,
    }

    impl PromptSession for ScriptedSession {
        fn ask(&mut self, question: &str) -> io::Result<String> {
            self.questions.borrow_mut().push(question.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    impl Drop for ScriptedSession {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    impl Terminal for ScriptedTerminal {
        type Session = ScriptedSession;

        fn acquire(&mut self) -> io::Result<ScriptedSession> {
            if self.fail_acquire {
                return Err(io::Error::other("no tty"));
            }
            self.acquired.set(self.acquired.get() + 1);
            Ok(ScriptedSession {
                answers: Rc::clone(&self.answers),
                questions: Rc::clone(&self.questions),
                released: Rc::clone(&self.released),
            })
        }
    }

    fn params(names: &[&str]) -> Vec<ParameterSpec> {
        names.iter().map(|n| ParameterSpec::new(*n)).collect()
    }

    #[test]
    fn option_wins_over_prompt() {
        let mut terminal = ScriptedTerminal::answering(&["prompted"]);
        let options = InvocationOptions::parse(["--name", "flagged"]);

        let resolved = InputResolver::new(false)
            .resolve(&params(&["name"]), &options, &mut terminal)
            .unwrap();

        assert_eq!(resolved.get("name"), Some("flagged"));
        assert_eq!(terminal.acquired.get(), 0);
        assert!(terminal.questions.borrow().is_empty());
    }

    #[test]
    fn bare_flag_resolves_true() {
        let mut terminal = ScriptedTerminal::default();
        let options = InvocationOptions::parse(["--force"]);

        let resolved = InputResolver::new(false)
            .resolve(&params(&["force"]), &options, &mut terminal)
            .unwrap();

        assert_eq!(resolved.get("force"), Some("true"));
    }

    #[test]
    fn piped_resolves_empty_without_prompt() {
        let mut terminal = ScriptedTerminal::answering(&["unused"]);

        let resolved = InputResolver::new(true)
            .resolve(
                &params(&["a", "b"]),
                &InvocationOptions::default(),
                &mut terminal,
            )
            .unwrap();

        assert_eq!(resolved.get("a"), Some(""));
        assert_eq!(resolved.get("b"), Some(""));
        assert_eq!(terminal.acquired.get(), 0);
    }

    #[test]
    fn piped_still_uses_options() {
        let mut terminal = ScriptedTerminal::default();
        let options = InvocationOptions::parse(["--a", "1"]);

        let resolved = InputResolver::new(true)
            .resolve(&params(&["a", "b"]), &options, &mut terminal)
            .unwrap();

        assert_eq!(resolved.iter().collect::<Vec<_>>(), [("a", "1"), ("b", "")]);
    }

    #[test]
    fn prompts_in_order_with_one_session() {
        let mut terminal = ScriptedTerminal::answering(&["first", "third"]);
        let options = InvocationOptions::parse(["--b", "second"]);
        let specs = vec![
            ParameterSpec::new("a").with_description("Alpha value"),
            ParameterSpec::new("b"),
            ParameterSpec::new("c"),
        ];

        let resolved = InputResolver::new(false)
            .resolve(&specs, &options, &mut terminal)
            .unwrap();

        assert_eq!(
            resolved.iter().collect::<Vec<_>>(),
            [("a", "first"), ("b", "second"), ("c", "third")]
        );
        assert_eq!(*terminal.questions.borrow(), ["Alpha value:\n> ", "c:\n> "]);
        assert_eq!(terminal.acquired.get(), 1);
        assert_eq!(terminal.released.get(), 1);
    }

    #[test]
    fn no_params_never_acquires() {
        let mut terminal = ScriptedTerminal::default();

        let resolved = InputResolver::new(false)
            .resolve(&[], &InvocationOptions::default(), &mut terminal)
            .unwrap();

        assert!(resolved.is_empty());
        assert_eq!(terminal.acquired.get(), 0);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let mut terminal = ScriptedTerminal::default();
        let options = InvocationOptions::parse(["--other", "x"]);

        let resolved = InputResolver::new(true)
            .resolve(&params(&["name"]), &options, &mut terminal)
            .unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get("name"), Some(""));
        assert!(!resolved.contains("other"));
    }

    #[test]
    fn read_failure_releases_session() {
        let terminal_answers = vec![Ok("ok".to_string()), Err(io::Error::other("eof"))];
        let mut terminal = ScriptedTerminal::default();
        terminal.answers.borrow_mut().extend(terminal_answers);

        let err = InputResolver::new(false)
            .resolve(
                &params(&["a", "b", "c"]),
                &InvocationOptions::default(),
                &mut terminal,
            )
            .unwrap_err();

        assert!(matches!(err, PromptError::Read { ref name, .. } if name == "b"));
        assert_eq!(terminal.acquired.get(), 1);
        assert_eq!(terminal.released.get(), 1);
        assert_eq!(terminal.questions.borrow().len(), 2);
    }

    #[test]
    fn acquire_failure_is_reported() {
        let mut terminal = ScriptedTerminal {
            fail_acquire: true,
            ..Default::default()
        };

        let err = InputResolver::new(false)
            .resolve(&params(&["a"]), &InvocationOptions::default(), &mut terminal)
            .unwrap_err();

        assert!(matches!(err, PromptError::Acquire(_)));
    }
}

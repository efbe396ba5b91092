//! engine::exec
//!
//! Run a materialized script as a child process.
//!
//! # Contract
//!
//! - The child runs `<interpreter> <script> <args...>`.
//! - stdin, stdout and stderr are inherited, never captured.
//! - The environment is the ambient environment layered over
//!   `SNIPPETS_REGISTRY=<registry>`; an ambient value of the same name wins.
//! - The parent only waits. There is no timeout and no signal forwarding;
//!   an interrupt reaches the child through the shared terminal.
//!
//! # Exit Status
//!
//! A numeric exit code is returned as is. A child killed by signal `n`
//! yields `128 + n`. Anything else yields 1.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::registry::REGISTRY_ENV;

/// Exit status used when no better status is available.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Errors from running a script.
#[derive(Debug, Error)]
pub enum RunError {
    /// The interpreter could not be started.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Waiting for the child failed.
    #[error("failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
}

/// Build the child's environment.
///
/// Starts from the registry variable and layers `ambient` on top.
pub fn child_env<I>(registry: &str, ambient: I) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env = BTreeMap::new();
    env.insert(OsString::from(REGISTRY_ENV), OsString::from(registry));
    env.extend(ambient);
    env
}

/// Translate a child's exit status into this process's exit code.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    FALLBACK_EXIT_CODE
}

/// Run `script` under `interpreter` and wait for it to finish.
///
/// Returns the exit code to propagate.
///
/// # Errors
///
/// Returns `RunError::Spawn` if the interpreter cannot be started.
pub fn run_script(
    interpreter: &str,
    script: &Path,
    args: &[String],
    env: &BTreeMap<OsString, OsString>,
) -> Result<i32, RunError> {
    let mut command = Command::new(interpreter);
    command
        .arg(script)
        .args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!(
        interpreter,
        script = %script.display(),
        args = args.len(),
        "spawning script"
    );

    let mut child = command.spawn().map_err(|source| RunError::Spawn {
        program: interpreter.to_string(),
        source,
    })?;

    let status = child.wait().map_err(|source| RunError::Wait {
        program: interpreter.to_string(),
        source,
    })?;

    let code = exit_code(status);
    tracing::debug!(code, "script exited");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(s: &str) -> OsString {
        OsString::from(s)
    }

    #[test]
    fn registry_variable_present() {
        let env = child_env("https://registry.snippets.run", Vec::new());
        assert_eq!(
            env.get(&os(REGISTRY_ENV)),
            Some(&os("https://registry.snippets.run"))
        );
    }

    #[test]
    fn ambient_overrides_registry_variable() {
        let env = child_env(
            "https://registry.snippets.run",
            vec![
                (os(REGISTRY_ENV), os("http://local")),
                (os("HOME"), os("/home/me")),
            ],
        );
        assert_eq!(env.get(&os(REGISTRY_ENV)), Some(&os("http://local")));
        assert_eq!(env.get(&os("HOME")), Some(&os("/home/me")));
        assert_eq!(env.len(), 2);
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::process::ExitStatusExt;
        use tempfile::TempDir;

        fn sh_env() -> BTreeMap<OsString, OsString> {
            child_env("http://registry.test", std::env::vars_os())
        }

        fn script(dir: &TempDir, body: &str) -> std::path::PathBuf {
            let path = dir.path().join("script.sh");
            std::fs::write(&path, body).unwrap();
            path
        }

        #[test]
        fn numeric_code_passes_through() {
            assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
            assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
        }

        #[test]
        fn signal_maps_to_128_plus() {
            // Raw wait status for termination by SIGKILL (9)
            assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
        }

        #[test]
        fn propagates_child_exit_code() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "exit 7\n");

            let code = run_script("sh", &path, &[], &sh_env()).unwrap();
            assert_eq!(code, 7);
        }

        #[test]
        fn passes_args_after_script() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "[ \"$1\" = one ] && [ \"$2\" = two ] && [ $# -eq 2 ]\n");

            let args = vec!["one".to_string(), "two".to_string()];
            let code = run_script("sh", &path, &args, &sh_env()).unwrap();
            assert_eq!(code, 0);
        }

        #[test]
        fn child_sees_registry_variable() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "[ \"$SNIPPETS_REGISTRY\" = http://registry.test ]\n");

            let env = child_env(
                "http://registry.test",
                std::env::vars_os().filter(|(k, _)| k != REGISTRY_ENV),
            );
            let code = run_script("sh", &path, &[], &env).unwrap();
            assert_eq!(code, 0);
        }

        #[test]
        fn missing_interpreter_is_spawn_error() {
            let dir = TempDir::new().unwrap();
            let path = script(&dir, "true\n");

            let err = run_script("definitely-not-an-interpreter", &path, &[], &sh_env())
                .unwrap_err();
            assert!(matches!(err, RunError::Spawn { .. }));
            assert!(err.to_string().contains("definitely-not-an-interpreter"));
        }
    }
}

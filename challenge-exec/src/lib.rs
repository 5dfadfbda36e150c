//! Execution of the solution of a challenge.
//!
//! Given an [`Engine`] and the path of its entry file, [`executor_for`] builds an [`Executor`]:
//! a single callable that feeds some input to the solution and returns what it printed.
//!
//! There are two strategies, selected by the kind of the engine:
//! - [`ProcessExecutor`] spawns the engine's command, writes the input to its standard input and
//!   captures its standard output and standard error;
//! - [`InProcessExecutor`] calls the engine's entry point in this process, capturing what it
//!   prints through an [`OutputSink`](challenge_lang::OutputSink).
//!
//! Executors never terminate the process: a failing solution is reported as an
//! [`ExecutionError`] and the caller decides what to do with it.

#[macro_use]
extern crate log;

mod in_process;
mod process;

pub use in_process::InProcessExecutor;
pub use process::ProcessExecutor;

use std::path::Path;

use challenge_lang::{Engine, EngineKind};
use thiserror::Error;

/// What a successful execution of a solution produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    /// The standard output of the solution, without surrounding whitespace for external
    /// processes.
    pub stdout: String,
    /// The standard error of the solution, trimmed. A non-empty value is a warning.
    pub stderr: String,
    /// The exit status of the solution.
    pub status: i32,
}

/// The ways the execution of a solution can fail.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The command could not be started, it is probably not installed.
    #[error("Failed to spawn {command:?}")]
    Spawn {
        /// The command that was run.
        command: String,
        /// Why it was not possible to start it.
        #[source]
        source: std::io::Error,
    },
    /// Communicating with the child process failed.
    #[error("I/O error while running the solution")]
    Io(#[from] std::io::Error),
    /// The child process exited with a non-zero status.
    #[error("Child process exited ({status}): {stderr}")]
    ChildFailed {
        /// The exit status, `128 + signal` if the process was killed by a signal.
        status: i32,
        /// The trimmed standard error of the process.
        stderr: String,
    },
    /// The in-process solution returned an error.
    #[error("The solution failed")]
    Solution(#[source] anyhow::Error),
    /// The in-process solution panicked.
    #[error("The solution panicked: {0}")]
    Panicked(String),
}

/// Something able to run the solution of a challenge.
pub trait Executor {
    /// Run the solution once, feeding `input` to it. `None` means that there is no input at all,
    /// which is different from an empty input only for in-process solutions.
    fn run(&self, input: Option<&[u8]>) -> Result<ExecutionResult, ExecutionError>;
}

impl<F> Executor for F
where
    F: Fn(Option<&[u8]>) -> Result<ExecutionResult, ExecutionError>,
{
    fn run(&self, input: Option<&[u8]>) -> Result<ExecutionResult, ExecutionError> {
        self(input)
    }
}

/// Build the executor for the solution at `entry_file`, written for `engine`.
pub fn executor_for<P: AsRef<Path>>(engine: &Engine, entry_file: P) -> Box<dyn Executor> {
    let entry_file = entry_file.as_ref();
    match &engine.kind {
        EngineKind::InProcess { entry_point } => {
            debug!("Running {} in-process", entry_file.display());
            Box::new(InProcessExecutor::new(entry_point.clone()))
        }
        EngineKind::External { command, args } => {
            debug!("Running {} with {}", entry_file.display(), command);
            Box::new(ProcessExecutor::new(command, args.clone(), entry_file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challenge_lang::OutputSink;
    use speculoos::prelude::*;

    #[test]
    fn test_executor_for_in_process() {
        let engine = Engine::in_process("x", "main.x", |input, out: &mut dyn OutputSink| {
            out.print(input.unwrap_or("nothing").to_uppercase());
            Ok(())
        });
        let executor = executor_for(&engine, "main.x");
        let result = executor.run(Some(&b"hello"[..])).unwrap();
        assert_that!(result.stdout).is_equal_to("HELLO".to_string());
    }

    #[test]
    fn test_executor_for_external() {
        let engine = Engine::external("shell", "main.sh", "bash", vec![]);
        let tmpdir = tempfile::TempDir::new().unwrap();
        let main = tmpdir.path().join("main.sh");
        std::fs::write(&main, "echo from-bash").unwrap();
        let executor = executor_for(&engine, &main);
        let result = executor.run(None).unwrap();
        assert_that!(result.stdout).is_equal_to("from-bash".to_string());
    }

    #[test]
    fn test_closure_executor() {
        let executor = |_: Option<&[u8]>| {
            Ok::<_, ExecutionError>(ExecutionResult {
                stdout: "42".into(),
                ..Default::default()
            })
        };
        assert_that!(executor.run(None).unwrap().stdout).is_equal_to("42".to_string());
    }

    #[test]
    fn test_child_failed_message() {
        let err = ExecutionError::ChildFailed {
            status: 2,
            stderr: "boom".into(),
        };
        assert_that!(err.to_string()).is_equal_to("Child process exited (2): boom".to_string());
    }
}

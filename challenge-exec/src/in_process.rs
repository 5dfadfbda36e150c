use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use challenge_lang::EntryPoint;

use crate::{ExecutionError, ExecutionResult, Executor};

/// Runs the solution by calling its entry point inside this process.
///
/// Everything the solution prints goes to a buffer owned by the executor. The buffer is emptied
/// when the call ends, whether the solution returned, failed or panicked, so the next run always
/// starts from a clean capture.
pub struct InProcessExecutor {
    entry_point: EntryPoint,
    captured: RefCell<Vec<String>>,
}

impl InProcessExecutor {
    /// Make a new `InProcessExecutor` calling `entry_point`.
    pub fn new(entry_point: EntryPoint) -> InProcessExecutor {
        InProcessExecutor {
            entry_point,
            captured: RefCell::new(vec![]),
        }
    }
}

impl Executor for InProcessExecutor {
    fn run(&self, input: Option<&[u8]>) -> Result<ExecutionResult, ExecutionError> {
        let input = input.map(String::from_utf8_lossy);
        let mut buffer = self.captured.borrow_mut();
        let mut captured = scopeguard::guard(&mut *buffer, |captured| captured.clear());

        let entry_point = &self.entry_point;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            entry_point(input.as_deref(), &mut **captured)
        }));
        match outcome {
            Ok(Ok(())) => Ok(ExecutionResult {
                stdout: captured.join("\n"),
                stderr: String::new(),
                status: 0,
            }),
            Ok(Err(e)) => Err(ExecutionError::Solution(e)),
            Err(payload) => Err(ExecutionError::Panicked(panic_message(payload))),
        }
    }
}

/// Extract the message of a panic, if it is a string.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".into()
    }
}

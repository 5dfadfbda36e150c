use anyhow::Error;

use challenge_exec::ExecutionError;

/// Turns the result of a command into the exit code of the process.
pub trait NiceError {
    /// The exit code for this result, printing to stderr the error chain if there is one.
    ///
    /// A solution that exited with a non-zero status makes the process exit with the same status.
    /// Its standard error has already been reported by the UI, so it is not printed again.
    fn nice_exit_code(self) -> i32;
}

/// Print the error and all its causes to stderr.
pub fn print_error(error: &Error) {
    debug!("{:?}", error);
    let mut fail: &dyn std::error::Error = error.as_ref();
    eprintln!("Error: {fail}");
    while let Some(cause) = fail.source() {
        eprintln!("\nCaused by:\n    {cause}");
        fail = cause;
    }
}

/// The exit status of the solution, if the error is caused by its failure.
pub fn child_status(error: &Error) -> Option<i32> {
    error
        .chain()
        .find_map(|cause| match cause.downcast_ref::<ExecutionError>() {
            Some(ExecutionError::ChildFailed { status, .. }) => Some(*status),
            _ => None,
        })
}

impl NiceError for Result<bool, Error> {
    fn nice_exit_code(self) -> i32 {
        match self {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(e) => match child_status(&e) {
                Some(status) => {
                    debug!("The solution failed with status {}", status);
                    status
                }
                None => {
                    print_error(&e);
                    1
                }
            },
        }
    }
}

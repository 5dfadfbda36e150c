use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::{ExecutionError, ExecutionResult, Executor};

/// Runs the solution by spawning an external program.
///
/// The full command line is `command args... entry_file`. The input is written to the standard
/// input of the child, which is then closed; the call blocks until the child exits.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    command: String,
    args: Vec<String>,
    entry_file: PathBuf,
}

impl ProcessExecutor {
    /// Make a new `ProcessExecutor` that runs `entry_file` with `command`.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        command: S,
        args: Vec<String>,
        entry_file: P,
    ) -> ProcessExecutor {
        ProcessExecutor {
            command: command.into(),
            args,
            entry_file: entry_file.into(),
        }
    }

    /// The path of the solution this executor runs.
    pub fn entry_file(&self) -> &Path {
        &self.entry_file
    }

    /// Resolve the command in `$PATH`.
    fn program(&self) -> Result<PathBuf, ExecutionError> {
        which::which(&self.command).map_err(|e| ExecutionError::Spawn {
            command: self.command.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, e),
        })
    }
}

impl Executor for ProcessExecutor {
    fn run(&self, input: Option<&[u8]>) -> Result<ExecutionResult, ExecutionError> {
        let program = self.program()?;
        trace!(
            "Spawning {} {:?} {}",
            program.display(),
            self.args,
            self.entry_file.display()
        );
        let mut child = Command::new(&program)
            .args(&self.args)
            .arg(&self.entry_file)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecutionError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // the input is written from another thread, the child may fill the output pipes before
        // reading all of it
        let stdin = child.stdin.take();
        let input = input.map(<[u8]>::to_vec);
        let writer = std::thread::Builder::new()
            .name("Solution stdin".into())
            .spawn(move || -> std::io::Result<()> {
                if let (Some(mut stdin), Some(input)) = (stdin, input) {
                    stdin.write_all(&input)?;
                }
                Ok(())
            })?;

        let output = child.wait_with_output()?;
        match writer.join() {
            Ok(Ok(())) => {}
            // the solution exited without reading all the input
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                debug!("The solution did not read all its input");
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(ExecutionError::Panicked("stdin writer".into())),
        }

        let status = exit_code(output.status);
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if status != 0 {
            return Err(ExecutionError::ChildFailed { status, stderr });
        }
        Ok(ExecutionResult {
            stdout,
            stderr,
            status,
        })
    }
}

/// The numeric exit status of a process, following the shell convention for signals.
fn exit_code(status: ExitStatus) -> i32 {
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
    1
}

use std::path::PathBuf;

/// A message sent to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIMessage {
    /// The evaluation of a fixture is starting.
    Fixture {
        /// The path of the input file of the fixture.
        path: PathBuf,
    },

    /// The solution wrote something to its standard error, but did not fail.
    Stderr {
        /// The trimmed standard error.
        message: String,
    },

    /// The output of the solution is the expected one.
    Passed,

    /// The output of the solution differs from the expected one.
    Wrong {
        /// The content of the input file.
        input: Vec<u8>,
        /// What the solution printed.
        actual: String,
        /// What the solution should have printed.
        expected: String,
    },

    /// The solution exited with a non-zero status.
    ChildFailed {
        /// The exit status of the solution.
        status: i32,
        /// The trimmed standard error of the solution.
        stderr: String,
    },
}

use std::path::PathBuf;

use anyhow::{Context, Error};

use challenge_exec::{ExecutionError, ExecutionResult, Executor};

use crate::challenge::Challenge;
use crate::comparator::Comparator;
use crate::fixture::Fixture;
use crate::ui::{UIMessage, UI};

/// How a run of all the fixtures of a challenge ended, when no error happened.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// There were no input fixtures, the solution was run once without input.
    NoFixtures,
    /// All the fixtures were evaluated and the output was the expected one.
    AllPassed {
        /// The number of evaluated fixtures.
        count: usize,
    },
    /// A fixture produced the wrong output, the following fixtures were not evaluated.
    Wrong {
        /// The input file of the wrong fixture.
        fixture: PathBuf,
        /// The content of the input file.
        input: Vec<u8>,
        /// What the solution printed.
        actual: String,
        /// What the solution should have printed.
        expected: String,
    },
}

impl RunOutcome {
    /// Whether the solution is considered correct.
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::Wrong { .. })
    }
}

/// Runs the solution of a challenge against all its fixtures, stopping at the first failure.
pub struct FixtureRunner<'a> {
    executor: &'a dyn Executor,
    comparator: Comparator,
    trim_expected: bool,
}

impl<'a> FixtureRunner<'a> {
    /// Make a runner that evaluates the fixtures with `executor`, comparing the outputs exactly.
    pub fn new(executor: &'a dyn Executor) -> FixtureRunner<'a> {
        FixtureRunner {
            executor,
            comparator: Comparator::default(),
            trim_expected: false,
        }
    }

    /// Use a different comparator for the outputs.
    pub fn comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Remove the whitespaces around the expected output before comparing it.
    pub fn trim_expected(mut self, trim_expected: bool) -> Self {
        self.trim_expected = trim_expected;
        self
    }

    /// Evaluate all the fixtures of the challenge, in order.
    ///
    /// The evaluation stops at the first fixture with the wrong output, which is returned as
    /// [`RunOutcome::Wrong`]. Failures of the solution are returned as errors wrapping an
    /// [`ExecutionError`]; a missing output fixture is an I/O error.
    pub fn run_all(&self, challenge: &Challenge, ui: &mut dyn UI) -> Result<RunOutcome, Error> {
        let fixtures = challenge.fixtures()?;
        debug!(
            "Evaluating {} fixtures of {}",
            fixtures.len(),
            challenge.path.display()
        );
        if fixtures.is_empty() {
            let result = self.execute(None, ui)?;
            debug!("Output without fixtures: {:?}", result.stdout);
            return Ok(RunOutcome::NoFixtures);
        }
        for fixture in &fixtures {
            ui.on_message(UIMessage::Fixture {
                path: fixture.input.clone(),
            });
            if let Some(outcome) = self.evaluate(fixture, ui)? {
                return Ok(outcome);
            }
        }
        Ok(RunOutcome::AllPassed {
            count: fixtures.len(),
        })
    }

    /// Evaluate a single fixture, returning the outcome only if it is wrong.
    fn evaluate(&self, fixture: &Fixture, ui: &mut dyn UI) -> Result<Option<RunOutcome>, Error> {
        let input = fixture
            .read_input()
            .with_context(|| format!("Failed to read input file {}", fixture.input.display()))?;
        let expected = fixture.read_output().with_context(|| {
            format!(
                "Failed to read expected output file {}",
                fixture.output.display()
            )
        })?;
        let result = self.execute(Some(&input), ui)?;
        let expected_cmp = if self.trim_expected {
            expected.trim()
        } else {
            expected.as_str()
        };
        if self.comparator.matches(&result.stdout, expected_cmp) {
            trace!("{} passed", fixture.input.display());
            ui.on_message(UIMessage::Passed);
            return Ok(None);
        }
        ui.on_message(UIMessage::Wrong {
            input: input.clone(),
            actual: result.stdout.clone(),
            expected: expected.clone(),
        });
        Ok(Some(RunOutcome::Wrong {
            fixture: fixture.input.clone(),
            input,
            actual: result.stdout,
            expected,
        }))
    }

    /// Run the solution, forwarding the warnings and the failures to the UI.
    fn execute(&self, input: Option<&[u8]>, ui: &mut dyn UI) -> Result<ExecutionResult, Error> {
        match self.executor.run(input) {
            Ok(result) => {
                if !result.stderr.is_empty() {
                    ui.on_message(UIMessage::Stderr {
                        message: result.stderr.clone(),
                    });
                }
                Ok(result)
            }
            Err(ExecutionError::ChildFailed { status, stderr }) => {
                ui.on_message(UIMessage::ChildFailed {
                    status,
                    stderr: stderr.clone(),
                });
                Err(ExecutionError::ChildFailed { status, stderr }.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

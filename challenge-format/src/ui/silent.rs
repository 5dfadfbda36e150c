use crate::ui::*;

/// A UI for scripts: nothing is written to stdout, the exit code of the run is the only result.
///
/// The verdicts are still counted and logged when the run finishes, so `RUST_LOG=debug` shows
/// what happened.
#[derive(Debug, Default)]
pub struct SilentUI {
    fixtures: usize,
    passed: usize,
    warnings: usize,
    failure: Option<String>,
}

impl SilentUI {
    /// Make a new SilentUI.
    pub fn new() -> SilentUI {
        SilentUI::default()
    }
}

impl UI for SilentUI {
    fn on_message(&mut self, message: UIMessage) {
        match message {
            UIMessage::Fixture { path } => {
                trace!("Checking {}", path.display());
                self.fixtures += 1;
            }
            UIMessage::Stderr { .. } => self.warnings += 1,
            UIMessage::Passed => self.passed += 1,
            UIMessage::Wrong { .. } => self.failure = Some("wrong output".into()),
            UIMessage::ChildFailed { status, .. } => {
                self.failure = Some(format!("solution exited with status {}", status))
            }
        }
    }

    fn finish(&mut self) {
        debug!(
            "{}/{} fixtures passed, {} with warnings",
            self.passed, self.fixtures, self.warnings
        );
        if let Some(failure) = &self.failure {
            debug!("Stopped at fixture {}: {}", self.fixtures, failure);
        }
    }
}

use std::path::PathBuf;

use anyhow::{bail, Error};

use challenge_exec::executor_for;
use challenge_format::{find_challenge, getcwd, Comparator, FixtureRunner, RunOutcome};
use challenge_lang::EngineRegistry;

use crate::state::CurrentChallenge;
use crate::{StorageOpt, TestOpt};

/// Entry point of `challenge test`: evaluate the solution against the fixtures of a challenge.
pub fn main_test(opt: TestOpt, storage: &StorageOpt) -> Result<RunOutcome, Error> {
    if let Some(epsilon) = opt.epsilon {
        if !epsilon.is_finite() || epsilon < 0.0 {
            bail!("Invalid epsilon: {}", epsilon);
        }
    }
    let target = target_path(opt.path, storage);
    let challenge = find_challenge(&target, EngineRegistry::builtin())?;
    info!(
        "Testing {} with the {} engine",
        challenge.path.display(),
        challenge.engine.name
    );

    let executor = executor_for(&challenge.engine, challenge.entry_file());
    let runner = FixtureRunner::new(executor.as_ref())
        .comparator(Comparator::from_epsilon(opt.epsilon))
        .trim_expected(opt.trim_expected);
    let mut ui = opt.ui.build();
    let outcome = runner.run_all(&challenge, ui.as_mut());
    ui.finish();

    let outcome = outcome?;
    debug!("Outcome: {:?}", outcome);
    Ok(outcome)
}

/// The path to test: the provided one, the current challenge or the current directory.
fn target_path(path: Option<PathBuf>, storage: &StorageOpt) -> PathBuf {
    if let Some(path) = path {
        return path;
    }
    match CurrentChallenge::load(storage.store_dir()) {
        Some(current) => {
            info!("Using the current challenge {}", current.path.display());
            current.path
        }
        None => getcwd(),
    }
}

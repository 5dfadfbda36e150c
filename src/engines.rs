use anyhow::{anyhow, Error};

use challenge_lang::EngineRegistry;

use crate::state::CurrentChallenge;
use crate::StorageOpt;

/// Entry point of `challenge engines`: list the built-in engines in detection order.
pub fn main_engines() -> Result<(), Error> {
    for engine in EngineRegistry::builtin().engines() {
        println!(
            "{:<12}{:<10}{}",
            engine.name,
            engine.entry_file,
            engine.command_line()
        );
    }
    Ok(())
}

/// Entry point of `challenge current`: print the directory of the current challenge.
pub fn main_current(storage: &StorageOpt) -> Result<(), Error> {
    let current = CurrentChallenge::load(storage.store_dir())
        .ok_or_else(|| anyhow!("There is no current challenge, create one with `challenge init`"))?;
    println!("{}", current.path.display());
    Ok(())
}

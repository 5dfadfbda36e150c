use anyhow::{anyhow, bail, Context, Error};
use itertools::Itertools;

use challenge_format::{absolute, INPUT, OUTPUT};
use challenge_lang::EngineRegistry;

use crate::state::CurrentChallenge;
use crate::{InitOpt, StorageOpt};

/// Entry point of `challenge init`: scaffold a new challenge directory and make it the current
/// one.
pub fn main_init(opt: InitOpt, storage: &StorageOpt) -> Result<(), Error> {
    let registry = EngineRegistry::builtin();
    let engine = registry.from_name(&opt.engine).ok_or_else(|| {
        anyhow!(
            "Unknown engine \"{}\", the available engines are: {}",
            opt.engine,
            registry.engines().iter().map(|e| e.name).join(", ")
        )
    })?;
    let dir = absolute(&opt.dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create challenge directory {}", dir.display()))?;

    let entry_file = dir.join(engine.entry_file);
    if entry_file.exists() && !opt.force {
        bail!(
            "{} already exists, use --force to overwrite it",
            entry_file.display()
        );
    }
    if let Some(owner) = registry.lookup(&dir) {
        if owner.name != engine.name {
            warn!(
                "{} also contains {}, the {} engine will be used",
                dir.display(),
                owner.entry_file,
                owner.name
            );
        }
    }
    std::fs::write(&entry_file, engine.default_template.unwrap_or_default())
        .with_context(|| format!("Failed to write {}", entry_file.display()))?;
    for fixtures in [INPUT, OUTPUT] {
        let fixtures = dir.join(fixtures);
        std::fs::create_dir_all(&fixtures)
            .with_context(|| format!("Failed to create {}", fixtures.display()))?;
    }

    CurrentChallenge { path: dir.clone() }.save(storage.store_dir())?;
    println!("Created {}", entry_file.display());
    Ok(())
}

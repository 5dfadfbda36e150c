//! Shell completions for the `challenge` command, written to target/autocompletion unless a
//! directory is given.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell};

/// The name the completions are registered for.
const BIN_NAME: &str = "challenge";

#[derive(Parser, Debug, Clone)]
pub struct GenAutocompletionOpt {
    /// Where to write the autocompletion files
    #[clap(short = 't', long = "target")]
    pub target: Option<PathBuf>,

    /// Generate only for this shell, can be repeated. All the supported shells by default
    #[clap(short = 's', long = "shell", value_enum)]
    pub shells: Vec<Shell>,
}

impl GenAutocompletionOpt {
    fn target_dir(&self) -> PathBuf {
        match &self.target {
            Some(target) => target.clone(),
            None => Path::new(env!("CARGO_MANIFEST_DIR")).join("target/autocompletion"),
        }
    }

    fn shells(&self) -> Vec<Shell> {
        if self.shells.is_empty() {
            vec![
                Shell::Bash,
                Shell::Zsh,
                Shell::Fish,
                Shell::Elvish,
                Shell::PowerShell,
            ]
        } else {
            self.shells.clone()
        }
    }
}

/// Write the completion scripts, returning the paths of the written files.
pub fn main_gen_autocompletion(opt: GenAutocompletionOpt) -> Result<Vec<PathBuf>, Error> {
    let target = opt.target_dir();
    std::fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create target dir: {}", target.display()))?;
    let written = opt
        .shells()
        .into_iter()
        .map(|shell| write_completion(shell, &target))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "{} autocompletion files written to {}",
        written.len(),
        target.display()
    );
    Ok(written)
}

fn write_completion(shell: Shell, target: &Path) -> Result<PathBuf, Error> {
    let path = target.join(shell.file_name(BIN_NAME));
    debug!("Writing {} completion to {}", shell, path.display());
    let mut file = File::create(&path)
        .with_context(|| format!("Cannot write the {} completion to {}", shell, path.display()))?;
    clap_complete::generate(shell, &mut crate::Opt::command(), BIN_NAME, &mut file);
    Ok(path)
}

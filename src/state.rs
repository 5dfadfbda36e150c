//! Bookkeeping of the current challenge, the last one created with `challenge init`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};

/// Name of the file, inside the store directory, with the current challenge.
const CURRENT_FILE: &str = "current.json";

/// The challenge the user is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentChallenge {
    /// The absolute path of the challenge directory.
    pub path: PathBuf,
}

impl CurrentChallenge {
    /// Load the current challenge from the store directory. A missing or invalid file means that
    /// there is no current challenge.
    pub fn load<P: AsRef<Path>>(store_dir: P) -> Option<CurrentChallenge> {
        let file = store_dir.as_ref().join(CURRENT_FILE);
        let content = match std::fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) => {
                debug!("No current challenge in {}: {}", file.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(current) => Some(current),
            Err(e) => {
                warn!("Ignoring invalid {}: {}", file.display(), e);
                None
            }
        }
    }

    /// Store this challenge as the current one.
    pub fn save<P: AsRef<Path>>(&self, store_dir: P) -> Result<(), Error> {
        let store_dir = store_dir.as_ref();
        std::fs::create_dir_all(store_dir).with_context(|| {
            format!("Failed to create store directory {}", store_dir.display())
        })?;
        let file = store_dir.join(CURRENT_FILE);
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize current challenge")?;
        std::fs::write(&file, content)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        debug!("Current challenge is now {}", self.path.display());
        Ok(())
    }
}

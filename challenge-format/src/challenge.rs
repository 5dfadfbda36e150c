use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Error};

use challenge_lang::{Engine, EngineRegistry};

use crate::fixture::{Fixture, INPUT, OUTPUT};
use crate::getcwd;

/// A challenge directory together with the engine that owns it.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// The absolute path of the challenge directory.
    pub path: PathBuf,
    /// The engine whose entry file is inside the directory.
    pub engine: Arc<Engine>,
    /// The single input fixture to run, when the challenge was found from the path of a fixture.
    pub selected_fixture: Option<PathBuf>,
}

impl Challenge {
    /// The path of the solution.
    pub fn entry_file(&self) -> PathBuf {
        self.path.join(self.engine.entry_file)
    }

    /// The directory with the input fixtures.
    pub fn input_dir(&self) -> PathBuf {
        self.path.join(INPUT)
    }

    /// The directory with the expected output fixtures.
    pub fn output_dir(&self) -> PathBuf {
        self.path.join(OUTPUT)
    }

    /// The fixtures to run, sorted by the path of the input file.
    ///
    /// If a fixture was selected only that one is returned. A file inside `input/` that is not
    /// named `input*` is an error: it would never be run, and a run that skips every fixture
    /// cannot pass.
    pub fn fixtures(&self) -> Result<Vec<Fixture>, Error> {
        if let Some(selected) = &self.selected_fixture {
            let fixture = Fixture::from_input(selected).ok_or_else(|| {
                anyhow!("{} is not a valid input fixture", selected.display())
            })?;
            return Ok(vec![fixture]);
        }
        let pattern = glob::Pattern::escape(&self.input_dir().to_string_lossy()) + "/*";
        trace!("Searching fixtures with {}", pattern);
        let mut inputs = vec![];
        for entry in glob::glob(&pattern).context("Invalid fixture pattern")? {
            let path = entry.context("Cannot read the input directory")?;
            if path.is_file() {
                inputs.push(path);
            }
        }
        inputs.sort();
        inputs
            .iter()
            .map(|input| {
                Fixture::from_input(input).ok_or_else(|| {
                    anyhow!(
                        "{} is not a valid input fixture: its name must start with \"{}\"",
                        input.display(),
                        INPUT
                    )
                })
            })
            .collect()
    }
}

/// Find the challenge that `target` belongs to.
///
/// `target` can be the challenge directory itself, the solution, or one of its input or output
/// fixtures. In the last two cases the paired input fixture is selected.
pub fn find_challenge<P: AsRef<Path>>(
    target: P,
    registry: &EngineRegistry,
) -> Result<Challenge, Error> {
    let target = absolute(target.as_ref());
    let path = challenge_dir(&target);
    debug!("Challenge directory of {} is {}", target.display(), path.display());
    let engine = match registry.lookup(&path) {
        Some(engine) => engine,
        None => bail!("No challenge found at \"{}\"", path.display()),
    };
    let input_dir = path.join(INPUT);
    let selected_fixture = Fixture::input_of_output(&target)
        .or_else(|| Some(target.clone()))
        .filter(|input| input.parent() == Some(input_dir.as_path()) && input.is_file());
    if let Some(selected) = &selected_fixture {
        debug!("Selected fixture {}", selected.display());
    }
    Ok(Challenge {
        path,
        engine,
        selected_fixture,
    })
}

/// Derive the challenge directory from an absolute path: everything from the first `input` or
/// `output` component is dropped, then if what remains looks like a file its parent is taken.
pub fn challenge_dir(target: &Path) -> PathBuf {
    let mut dir = PathBuf::new();
    for component in target.components() {
        if component.as_os_str() == INPUT || component.as_os_str() == OUTPUT {
            break;
        }
        dir.push(component);
    }
    let looks_like_file = dir.is_file() || (dir.extension().is_some() && !dir.is_dir());
    if looks_like_file {
        if let Some(parent) = dir.parent() {
            return parent.to_path_buf();
        }
    }
    dir
}

/// The path that leads from the directory `base` to `path`, both absolute and normalized.
///
/// `..` components are used when `path` is not inside `base`. If the two paths have no common
/// root `path` is returned unchanged.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let mut path_components = path.components().peekable();
    let mut base_components = base.components().peekable();
    if path_components.peek() != base_components.peek() {
        return path.to_path_buf();
    }
    while let (Some(a), Some(b)) = (path_components.peek(), base_components.peek()) {
        if a != b {
            break;
        }
        path_components.next();
        base_components.next();
    }
    let mut result: PathBuf = base_components.map(|_| Component::ParentDir).collect();
    result.extend(path_components);
    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }
    result
}

/// Make `path` absolute, relative to the current directory, removing the `.` and `..`
/// components. Symlinks are not resolved.
pub fn absolute(path: &Path) -> PathBuf {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        getcwd().join(path)
    };
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}

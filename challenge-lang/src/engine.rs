use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Error;

/// Destination of the lines a solution running inside this process prints.
///
/// This is what an in-process solution uses instead of writing to the real standard output.
pub trait OutputSink {
    /// Append a whole line to the output.
    fn print(&mut self, line: String);

    /// Append a line made of many parts, joined with a single space.
    fn print_parts(&mut self, parts: &[&str]) {
        self.print(parts.join(" "));
    }
}

/// Collecting the lines into a vector is all a sink needs to do most of the time.
impl OutputSink for Vec<String> {
    fn print(&mut self, line: String) {
        self.push(line);
    }
}

/// The function called by the in-process strategy. It receives the content of the input fixture,
/// if any, and the sink to print to.
pub type EntryPoint =
    Arc<dyn Fn(Option<&str>, &mut dyn OutputSink) -> Result<(), Error> + Send + Sync>;

/// How the solution of an engine is executed.
#[derive(Clone)]
pub enum EngineKind {
    /// Spawn `command` with `args` followed by the path of the entry file.
    External {
        /// The program to run, searched in `$PATH` if not a path.
        command: String,
        /// Fixed arguments prepended before the entry file.
        args: Vec<String>,
    },
    /// Call `entry_point` inside the current process.
    InProcess {
        /// The solution itself.
        entry_point: EntryPoint,
    },
}

impl fmt::Debug for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::External { command, args } => f
                .debug_struct("External")
                .field("command", command)
                .field("args", args)
                .finish(),
            EngineKind::InProcess { .. } => f.debug_struct("InProcess").finish_non_exhaustive(),
        }
    }
}

/// A declarative description of how to treat a challenge directory written in a given language.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Unique name of the engine, used on the command line.
    pub name: &'static str,
    /// The file that must exist in a directory for this engine to claim it.
    pub entry_file: &'static str,
    /// How to run the solution.
    pub kind: EngineKind,
    /// Boilerplate written as the entry file of a freshly scaffolded challenge.
    pub default_template: Option<&'static str>,
}

impl Engine {
    /// Make an engine that spawns an external program.
    pub fn external<S: Into<String>>(
        name: &'static str,
        entry_file: &'static str,
        command: S,
        args: Vec<String>,
    ) -> Engine {
        Engine {
            name,
            entry_file,
            kind: EngineKind::External {
                command: command.into(),
                args,
            },
            default_template: None,
        }
    }

    /// Make an engine whose solution is the provided function.
    pub fn in_process<F>(name: &'static str, entry_file: &'static str, entry_point: F) -> Engine
    where
        F: Fn(Option<&str>, &mut dyn OutputSink) -> Result<(), Error> + Send + Sync + 'static,
    {
        Engine {
            name,
            entry_file,
            kind: EngineKind::InProcess {
                entry_point: Arc::new(entry_point),
            },
            default_template: None,
        }
    }

    /// Set the template to use when scaffolding a challenge with this engine.
    pub fn with_template(mut self, template: &'static str) -> Engine {
        self.default_template = Some(template);
        self
    }

    /// Whether this engine claims the provided directory, i.e. its entry file exists there.
    pub fn claims(&self, dir: &Path) -> bool {
        dir.join(self.entry_file).exists()
    }

    /// Human readable form of the command used for running a solution.
    pub fn command_line(&self) -> String {
        match &self.kind {
            EngineKind::External { command, args } => {
                let mut line = vec![command.as_str()];
                line.extend(args.iter().map(String::as_str));
                line.push(self.entry_file);
                shell_words::join(line)
            }
            EngineKind::InProcess { .. } => "(in-process)".into(),
        }
    }
}

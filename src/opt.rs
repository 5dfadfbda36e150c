use std::path::PathBuf;

use clap::{Parser, Subcommand};

use challenge_format::ui::UIType;

use crate::gen_autocompletion::GenAutocompletionOpt;

#[derive(Parser, Debug)]
#[clap(
    name = "challenge",
    version,
    about = "Run the solution of a programming challenge against its input/output fixtures"
)]
pub struct Opt {
    #[clap(flatten, next_help_heading = Some("LOGGING"))]
    pub logger: LoggerOpt,

    #[clap(flatten, next_help_heading = Some("STORAGE"))]
    pub storage: StorageOpt,

    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the solution of a challenge against its fixtures
    Test(TestOpt),
    /// Create a new challenge directory with the template of an engine
    Init(InitOpt),
    /// List the available engines, in detection order
    Engines,
    /// Print the path of the current challenge
    Current,
    /// Generate the autocompletion files for the shell
    GenAutocompletion(GenAutocompletionOpt),
}

#[derive(Parser, Debug, Clone)]
pub struct TestOpt {
    /// The challenge to test: its directory, its solution or one of its fixtures
    ///
    /// When a fixture is given only that fixture is evaluated. Without a path the current
    /// challenge is tested, or the current directory if there is none.
    pub path: Option<PathBuf>,

    /// Compare the outputs token by token, accepting numbers within this tolerance
    #[clap(long)]
    pub epsilon: Option<f64>,

    /// Ignore the whitespaces around the expected output
    #[clap(long)]
    pub trim_expected: bool,

    /// Which UI to use, available UIs are: print, silent
    #[clap(long, default_value = "print")]
    pub ui: UIType,
}

#[derive(Parser, Debug, Clone)]
pub struct InitOpt {
    /// Where to create the challenge
    pub dir: PathBuf,

    /// The engine of the solution, see `challenge engines`
    #[clap(short, long)]
    pub engine: String,

    /// Overwrite the solution if it already exists
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Parser, Debug, Clone)]
pub struct StorageOpt {
    /// Where to store the state of the tool, like the current challenge
    #[clap(long = "store-dir", env = "CHALLENGE_STORE_DIR", global = true)]
    pub store_dir: Option<PathBuf>,
}

impl StorageOpt {
    /// Get the store directory of this configuration. If nothing is specified a cache directory is
    /// used if available, otherwise a temporary directory.
    pub fn store_dir(&self) -> PathBuf {
        match &self.store_dir {
            Some(dir) => dir.clone(),
            None => {
                let project = directories::ProjectDirs::from("", "", "challenge-runner");
                if let Some(project) = project {
                    project.cache_dir().to_owned()
                } else {
                    std::env::temp_dir().join("challenge-runner")
                }
            }
        }
    }
}

impl LoggerOpt {
    pub fn enable_log(&self) {
        if self.verbose > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
            match self.verbose {
                0 => unreachable!(),
                1 => std::env::set_var("RUST_LOG", "info"),
                2 => std::env::set_var("RUST_LOG", "debug"),
                _ => std::env::set_var("RUST_LOG", "trace"),
            }
        }

        env_logger::Builder::from_default_env()
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}

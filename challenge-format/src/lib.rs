//! Challenge discovery and evaluation.
//!
//! This crate finds the challenge a path belongs to ([`find_challenge`]), lists its fixtures and
//! evaluates a solution against them with a [`FixtureRunner`], reporting the progress to a
//! [`UI`](ui::UI).
//!
//! A challenge directory looks like this:
//!
//! ```text
//! challenge/
//!   main.js            the solution, its name selects the engine
//!   input/input1.txt   the input fixtures
//!   output/output1.txt the expected outputs, paired by name
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use std::path::PathBuf;

mod challenge;
mod comparator;
mod fixture;
mod runner;
pub mod ui;

pub use challenge::{absolute, challenge_dir, find_challenge, relative_path, Challenge};
pub use comparator::{Comparator, DEFAULT_EPSILON};
pub use fixture::{Fixture, INPUT, OUTPUT};
pub use runner::{FixtureRunner, RunOutcome};

/// The current working directory.
///
/// `$PWD` is preferred over the real working directory so that paths under symlinked directories
/// are shown as the user typed them.
pub fn getcwd() -> PathBuf {
    std::env::var("PWD")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."))
}

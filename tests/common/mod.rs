#![allow(dead_code)]

pub use test_interface::*;

mod test_interface;

use std::path::PathBuf;

pub fn setup() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .is_test(true)
        .try_init();
}

/// The path of one of the challenges inside tests/challenges.
pub fn challenge_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("challenges")
        .join(name)
}

/// Whether the solutions of the test challenges can be run. If bash is missing the tests are
/// skipped.
pub fn has_bash() -> bool {
    if which::which("bash").is_ok() {
        true
    } else {
        eprintln!("bash not found in $PATH, skipping test");
        false
    }
}

/// Whether node is available for the JavaScript challenges. If it is missing the tests are
/// skipped.
pub fn has_node() -> bool {
    if which::which("node").is_ok() {
        true
    } else {
        eprintln!("node not found in $PATH, skipping test");
        false
    }
}

/// The challenge directory containing `target`, used as the working directory of the binary.
pub fn challenge_root(target: &std::path::Path) -> PathBuf {
    let mut root = PathBuf::new();
    for component in target.components() {
        if component.as_os_str() == "input" || component.as_os_str() == "output" {
            break;
        }
        root.push(component);
    }
    if root.is_file() {
        root.pop();
    }
    root
}

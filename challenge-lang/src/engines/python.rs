use crate::engines::CommandConfiguration;
use crate::Engine;

const TEMPLATE: &str = r#"import sys

lines = sys.stdin.read().splitlines()
"#;

/// Python solutions, run with `python3` (`$CHALLENGE_PYTHON`).
pub fn engine() -> Engine {
    CommandConfiguration::from_env("CHALLENGE_PYTHON", "python3")
        .engine("python", "main.py")
        .with_template(TEMPLATE)
}

use crate::engines::CommandConfiguration;
use crate::Engine;

const TEMPLATE: &str = r#"#!/usr/bin/env bash

while read -r line; do
    :
done
"#;

/// Shell solutions, run with `bash` (`$CHALLENGE_BASH`).
pub fn engine() -> Engine {
    CommandConfiguration::from_env("CHALLENGE_BASH", "bash")
        .engine("shell", "main.sh")
        .with_template(TEMPLATE)
}

use crate::engines::CommandConfiguration;
use crate::Engine;

const TEMPLATE: &str = r#"'use strict';

module.exports = input => {
    const lines = input.split('\n');
};
"#;

/// Node script that loads the solution as a module. If the module exports a function, it is
/// called once with the whole standard input and every `console.log` call becomes a line of the
/// output. Otherwise the solution already ran while being loaded, like a plain script.
///
/// It is kept on a single line since it is part of the command line of the engine.
const BOOTSTRAP: &str = concat!(
    "const solution = require(require('path').resolve(process.argv[1]));",
    "if (typeof solution === 'function') {",
    " const input = require('fs').readFileSync(0, 'utf-8');",
    " const lines = [];",
    " const log = console.log;",
    " console.log = (...args) => { lines.push(args.join(' ')); };",
    " try { solution(input); } finally { console.log = log; }",
    " if (lines.length > 0) { process.stdout.write(lines.join('\\n') + '\\n'); }",
    "}",
);

/// JavaScript solutions, run with `node` (`$CHALLENGE_NODE`) through a small bootstrap that
/// supports both plain scripts and modules exporting a function.
pub fn engine() -> Engine {
    CommandConfiguration::from_env("CHALLENGE_NODE", "node")
        .arg("-e")
        .arg(BOOTSTRAP)
        .engine("javascript", "main.js")
        .with_template(TEMPLATE)
}

use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, StandardStream};

use crate::ui::*;
use crate::{absolute, cwrite, cwriteln, getcwd, relative_path};

/// A simple UI that prints to stdout a line for each fixture, with the input, the output and the
/// expected output of the first wrong one.
pub struct PrintUI {
    stream: StandardStream,
    /// Whether the cursor is after a fixture header, on the same line.
    line_open: bool,
}

impl PrintUI {
    /// Make a new PrintUI.
    pub fn new() -> PrintUI {
        PrintUI {
            stream: StandardStream::stdout(ColorChoice::Auto),
            line_open: false,
        }
    }

    /// Go to the next line, if a header is waiting for its result.
    fn close_line(&mut self) {
        if self.line_open {
            let _ = writeln!(self.stream);
            self.line_open = false;
        }
    }

    /// Write a block of text making sure it ends with a new line.
    fn write_block(&mut self, text: &str) {
        let _ = write!(self.stream, "{}", text);
        if !text.ends_with('\n') {
            let _ = writeln!(self.stream);
        }
    }
}

impl Default for PrintUI {
    fn default() -> Self {
        PrintUI::new()
    }
}

/// The path to show for a fixture, relative to the current directory.
fn display_path(path: &Path) -> String {
    relative_path(path, &absolute(&getcwd()))
        .display()
        .to_string()
}

impl UI for PrintUI {
    fn on_message(&mut self, message: UIMessage) {
        match message {
            UIMessage::Fixture { path } => {
                self.close_line();
                let _ = cwrite!(self.stream, BOLD, "# {}", display_path(&path));
                let _ = self.stream.flush();
                self.line_open = true;
            }
            UIMessage::Stderr { message } => {
                self.close_line();
                let _ = cwrite!(self.stream, YELLOW, "## stderr: ");
                self.write_block(&message);
            }
            UIMessage::Passed => {
                if self.line_open {
                    let _ = cwriteln!(self.stream, GREEN, " √");
                } else {
                    let _ = cwriteln!(self.stream, GREEN, "√");
                }
                self.line_open = false;
            }
            UIMessage::Wrong {
                input,
                actual,
                expected,
            } => {
                if self.line_open {
                    let _ = cwriteln!(self.stream, RED, " [WRONG]");
                } else {
                    let _ = cwriteln!(self.stream, RED, "[WRONG]");
                }
                self.line_open = false;
                let _ = cwriteln!(self.stream, BOLD, "input:");
                self.write_block(&String::from_utf8_lossy(&input));
                let _ = cwriteln!(self.stream, BOLD, "output:");
                self.write_block(&actual);
                let _ = cwriteln!(self.stream, BOLD, " -- should be --");
                self.write_block(&expected);
                let _ = writeln!(self.stream);
            }
            UIMessage::ChildFailed { status, stderr } => {
                self.close_line();
                let _ = cwriteln!(
                    self.stream,
                    RED,
                    "Child process exited ({}): {}",
                    status,
                    stderr
                );
            }
        }
    }

    fn finish(&mut self) {
        self.close_line();
        let _ = self.stream.flush();
    }
}

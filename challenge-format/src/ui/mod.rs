//! The UI reporting the evaluation of the fixtures.

pub use termcolor::WriteColor;
use termcolor::{Color, ColorSpec};

pub use print::PrintUI;
pub use silent::SilentUI;
pub use ui_message::UIMessage;

mod print;
mod silent;
mod ui_message;

lazy_static! {
    /// Whether the 256 color palette should be used. It is opt-in with `CHALLENGE_ANSI256=true`
    /// and needs a terminal that supports it.
    static ref HAS_256: bool = std::env::var("CHALLENGE_ANSI256").as_deref() == Ok("true")
        && supports_color::on(supports_color::Stream::Stdout).map_or(false, |s| s.has_256);
    /// Failures: wrong outputs and crashed solutions.
    pub static ref RED: ColorSpec = verdict_color(Color::Red, 196);
    /// Passed fixtures.
    pub static ref GREEN: ColorSpec = verdict_color(Color::Green, 118);
    /// Warnings printed by the solution.
    pub static ref YELLOW: ColorSpec = verdict_color(Color::Yellow, 226);
    /// Fixture headers and the labels of the blocks of a wrong answer.
    pub static ref BOLD: ColorSpec = {
        let mut color = ColorSpec::new();
        color.set_bold(true);
        color
    };
}

/// A bold and intense color, from the 256 palette when it is available.
fn verdict_color(basic: Color, ansi256: u8) -> ColorSpec {
    let mut color = ColorSpec::new();
    let fg = if *HAS_256 {
        Color::Ansi256(ansi256)
    } else {
        basic
    };
    color.set_fg(Some(fg)).set_intense(true).set_bold(true);
    color
}

/// The trait that describes the UI functionalities.
pub trait UI {
    /// Process a new UI message.
    fn on_message(&mut self, message: UIMessage);
    /// Called when no more messages will be sent.
    fn finish(&mut self);
}

/// The type of the UI to use, it enumerates all the known UI interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIType {
    /// The `PrintUI`.
    Print,
    /// The `SilentUI`.
    Silent,
}

impl UIType {
    /// Make a new instance of this UI.
    pub fn build(self) -> Box<dyn UI> {
        match self {
            UIType::Print => Box::new(PrintUI::new()),
            UIType::Silent => Box::new(SilentUI::new()),
        }
    }
}

impl std::str::FromStr for UIType {
    type Err = String;

    fn from_str(s: &str) -> Result<UIType, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "print" => Ok(UIType::Print),
            "silent" => Ok(UIType::Silent),
            _ => Err(format!("Unknown ui: {}", s)),
        }
    }
}

/// Write to a [`WriteColor`] stream with the given color, then reset it. The arguments that
/// follow are passed to `write!`. Evaluates to a `std::io::Result<()>`.
///
/// ```
/// use challenge_format::cwrite;
/// use challenge_format::ui::BOLD;
/// use termcolor::{ColorChoice, StandardStream};
///
/// let mut stream = StandardStream::stdout(ColorChoice::Never);
/// cwrite!(stream, BOLD, "# {}", "input/input1.txt").unwrap();
/// ```
#[macro_export]
macro_rules! cwrite {
    ($stream:expr, $color:expr, $($arg:tt)*) => {{
        use std::io::Write;
        use $crate::ui::WriteColor;
        let stream = &mut $stream;
        stream
            .set_color(&$color)
            .and_then(|_| write!(stream, $($arg)*))
            .and_then(|_| stream.reset())
    }};
}

/// Like [`cwrite!`], ending with a new line.
///
/// ```
/// use challenge_format::cwriteln;
/// use challenge_format::ui::GREEN;
/// use termcolor::{ColorChoice, StandardStream};
///
/// let mut stream = StandardStream::stdout(ColorChoice::Never);
/// cwriteln!(stream, GREEN, " √").unwrap();
/// ```
#[macro_export]
macro_rules! cwriteln {
    ($stream:expr, $color:expr, $($arg:tt)*) => {{
        use std::io::Write;
        use $crate::ui::WriteColor;
        let stream = &mut $stream;
        stream
            .set_color(&$color)
            .and_then(|_| writeln!(stream, $($arg)*))
            .and_then(|_| stream.reset())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_type_from_str() {
        assert_eq!("print".parse::<UIType>(), Ok(UIType::Print));
        assert_eq!("SILENT".parse::<UIType>(), Ok(UIType::Silent));
        assert!("curses".parse::<UIType>().is_err());
    }

    #[test]
    fn test_cwrite_plain_stream() {
        let mut stream = termcolor::NoColor::new(Vec::new());
        cwrite!(stream, BOLD, "# {}", "input1").unwrap();
        cwriteln!(stream, GREEN, " √").unwrap();
        assert_eq!(String::from_utf8(stream.into_inner()).unwrap(), "# input1 √\n");
    }

    #[test]
    fn test_cwrite_sets_the_color() {
        let mut stream = termcolor::Ansi::new(Vec::new());
        cwrite!(stream, BOLD, "x").unwrap();
        let written = String::from_utf8(stream.into_inner()).unwrap();
        assert!(written.contains('x'));
        assert_ne!(written, "x");
    }
}

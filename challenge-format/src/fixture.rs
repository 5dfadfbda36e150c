use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the directory with the input fixtures, also the prefix of their file names.
pub const INPUT: &str = "input";
/// Name of the directory with the output fixtures, also the prefix of their file names.
pub const OUTPUT: &str = "output";

/// A pair of input and expected output files.
///
/// The output file is obtained from the input file replacing the `input/input` segment of its path
/// with `output/output`: `input/input01.txt` is paired with `output/output01.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// The path of the input file.
    pub input: PathBuf,
    /// The path of the expected output file. It may not exist.
    pub output: PathBuf,
}

impl Fixture {
    /// Pair an input file with its output. Returns `None` if the input file does not follow the
    /// `input/input*` naming convention.
    pub fn from_input<P: Into<PathBuf>>(input: P) -> Option<Fixture> {
        let input = input.into();
        let output = swap_segment(&input, INPUT, OUTPUT)?;
        Some(Fixture { input, output })
    }

    /// The input file paired with an `output/output*` file, if `path` follows the convention.
    pub fn input_of_output<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
        swap_segment(path.as_ref(), OUTPUT, INPUT)
    }

    /// Read the content of the input file, as raw bytes.
    pub fn read_input(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.input)
    }

    /// Read the content of the expected output file, as text.
    pub fn read_output(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.output)
    }
}

/// Replace `from/from<suffix>` at the end of `path` with `to/to<suffix>`.
fn swap_segment(path: &Path, from: &str, to: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let suffix = name.strip_prefix(from)?;
    let dir = path.parent()?;
    if dir.file_name()? != from {
        return None;
    }
    let mut name = OsString::from(to);
    name.push(suffix);
    Some(dir.parent()?.join(to).join(name))
}

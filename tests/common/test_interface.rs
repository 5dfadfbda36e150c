use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Interface for running the `challenge` binary and checking what it did.
#[derive(Debug)]
pub struct TestInterface {
    output: Output,
    store_dir: PathBuf,
    _tempdir: TempDir,
}

/// Builder of an invocation of the `challenge` binary.
#[derive(Debug)]
pub struct TestRun {
    args: Vec<String>,
    cwd: Option<PathBuf>,
    envs: Vec<(String, String)>,
    store_dir: Option<PathBuf>,
    tempdir: TempDir,
}

impl TestRun {
    /// Prepare an invocation of `challenge` with these arguments, with a fresh store directory.
    pub fn new<S: AsRef<str>>(args: &[S]) -> TestRun {
        super::setup();
        TestRun {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
            cwd: None,
            envs: vec![],
            store_dir: None,
            tempdir: TempDir::new().expect("Cannot create tempdir"),
        }
    }

    /// Prepare `challenge test <target> <extra_args>`, run from the directory of the challenge.
    pub fn test<P: AsRef<Path>>(target: P, extra_args: &[&str]) -> TestRun {
        let target = target.as_ref();
        let mut args = vec!["test".to_string(), target.to_string_lossy().to_string()];
        args.extend(extra_args.iter().map(|a| a.to_string()));
        let cwd = super::challenge_root(target);
        TestRun::new(&args).cwd(cwd)
    }

    /// Run the binary from this directory.
    pub fn cwd<P: Into<PathBuf>>(mut self, cwd: P) -> TestRun {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set an environment variable for the binary.
    pub fn env<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> TestRun {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Use this store directory instead of a fresh one, sharing the state with other runs.
    pub fn with_store_dir<P: Into<PathBuf>>(mut self, store_dir: P) -> TestRun {
        self.store_dir = Some(store_dir.into());
        self
    }

    /// The directory where the state of the tool is stored.
    pub fn store_dir(&self) -> PathBuf {
        match &self.store_dir {
            Some(dir) => dir.clone(),
            None => self.tempdir.path().join("store"),
        }
    }

    /// A scratch directory that lives as long as the test.
    pub fn scratch(&self) -> &Path {
        self.tempdir.path()
    }

    /// Run the binary and wait for it to exit.
    pub fn run(self) -> TestInterface {
        let store_dir = self.store_dir();
        let mut command = Command::new(env!("CARGO_BIN_EXE_challenge"));
        command
            .arg("--store-dir")
            .arg(&store_dir)
            .args(&self.args)
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env_remove("CHALLENGE_STORE_DIR");
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd).env("PWD", cwd);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        let output = command.output().expect("Cannot run challenge");
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        TestInterface {
            output,
            store_dir,
            _tempdir: self.tempdir,
        }
    }
}

impl TestInterface {
    /// What the binary printed to stdout.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    /// What the binary printed to stderr.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// The directory where the state of the tool was stored.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Expect the binary to exit with this code.
    pub fn exit_code(self, code: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(code),
            "Unexpected exit code, stdout:\n{}",
            self.stdout()
        );
        self
    }

    /// Expect the binary to exit successfully.
    pub fn success(self) -> Self {
        self.exit_code(0)
    }

    /// Expect the stdout to be exactly this.
    pub fn stdout_is<S: AsRef<str>>(self, expected: S) -> Self {
        assert_eq!(self.stdout(), expected.as_ref());
        self
    }

    /// Expect the stdout to contain this text.
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let stdout = self.stdout();
        if !stdout.contains(text.as_ref()) {
            panic!(
                "Expecting stdout to contain {:?}, but it is {:?}",
                text.as_ref(),
                stdout
            );
        }
        self
    }

    /// Expect the stdout not to contain this text.
    pub fn stdout_not_contains<S: AsRef<str>>(self, text: S) -> Self {
        let stdout = self.stdout();
        if stdout.contains(text.as_ref()) {
            panic!(
                "Expecting stdout not to contain {:?}, but it is {:?}",
                text.as_ref(),
                stdout
            );
        }
        self
    }

    /// Expect the stderr to contain this text.
    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let stderr = self.stderr();
        if !stderr.contains(text.as_ref()) {
            panic!(
                "Expecting stderr to contain {:?}, but it is {:?}",
                text.as_ref(),
                stderr
            );
        }
        self
    }
}

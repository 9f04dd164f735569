//! Pipeline output sink
//!
//! Outputs are named key/value pairs for the invoking pipeline. When the
//! `GITHUB_OUTPUT` file is available, `name=value` lines are appended to it;
//! otherwise they are printed to stdout. Each output is set exactly once per
//! run, in the order the run produces it.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Environment variable naming the pipeline output file
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Sink for pipeline outputs
#[derive(Debug)]
pub struct Outputs {
    target: Target,
}

#[derive(Debug)]
enum Target {
    File(PathBuf),
    Stdout,
}

impl Outputs {
    /// Create a sink from the process environment
    pub fn from_env() -> Self {
        match std::env::var(OUTPUT_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::file(path),
            _ => Self::stdout(),
        }
    }

    /// Create a sink appending to the given file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
        }
    }

    /// Create a sink printing to stdout
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Emit one named output value
    pub fn set(&self, name: &str, value: impl Display) -> io::Result<()> {
        match &self.target {
            Target::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}={value}")
            }
            Target::Stdout => {
                println!("{name}={value}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_sink_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.txt");

        let outputs = Outputs::file(&path);
        outputs.set("latest_version", "1.2.3").unwrap();
        outputs.set("current_version", "1.2.2").unwrap();
        outputs.set("matches", false).unwrap();
        outputs.set("newer", false).unwrap();
        outputs.set("diff", "patch").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "latest_version=1.2.3\ncurrent_version=1.2.2\nmatches=false\nnewer=false\ndiff=patch\n"
        );
    }

    #[test]
    fn test_file_sink_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist-yet.txt");

        let outputs = Outputs::file(&path);
        outputs.set("matches", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "matches=true\n");
    }

    #[test]
    fn test_absent_diff_is_an_empty_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.txt");

        let outputs = Outputs::file(&path);
        outputs.set("diff", "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "diff=\n");
    }

    #[test]
    fn test_stdout_sink_does_not_error() {
        let outputs = Outputs::stdout();
        assert!(outputs.set("matches", true).is_ok());
    }
}

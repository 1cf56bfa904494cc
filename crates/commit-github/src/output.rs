//! Output sinks for the runner.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use commit_core::{OutputKey, OutputSink};
use uuid::Uuid;

/// Heredoc-style entry for the `$GITHUB_OUTPUT` file.
pub fn format_output(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
#[derive(Debug, Clone)]
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for GithubOutputFile {
    fn publish(&mut self, key: OutputKey, value: &str) -> io::Result<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if value.contains(&delimiter) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("value for '{key}' contains the output delimiter"),
            ));
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_output(key.name(), value, &delimiter).as_bytes())
    }
}

/// Prints `name=value` lines, for runs outside GitHub Actions.
#[derive(Debug)]
pub struct StdoutSink<W = io::Stdout> {
    writer: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn to_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for StdoutSink<W> {
    fn publish(&mut self, key: OutputKey, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{key}={value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_core::Outputs;
    use pretty_assertions::assert_eq;

    #[test]
    fn heredoc_format() {
        assert_eq!(
            format_output("commit_sha", "abc1234", "ghadelimiter_x"),
            "commit_sha<<ghadelimiter_x\nabc1234\nghadelimiter_x\n"
        );
    }

    #[test]
    fn output_file_appends_every_publication() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing<<EOF\nvalue\nEOF\n").unwrap();

        let mut sink = GithubOutputFile::new(&path);
        sink.publish(OutputKey::Committed, "true").unwrap();
        sink.publish(OutputKey::CommitSha, "").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "existing<<EOF");
        assert!(lines[3].starts_with("committed<<ghadelimiter_"));
        assert_eq!(lines[4], "true");
        assert_eq!(lines[5], &lines[3]["committed<<".len()..]);
        assert!(lines[6].starts_with("commit_sha<<ghadelimiter_"));
        assert_eq!(lines[7], "");
    }

    #[test]
    fn output_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = GithubOutputFile::new(dir.path().join("missing").join("output"));
        assert!(sink.publish(OutputKey::Pushed, "false").is_err());
    }

    #[test]
    fn stdout_sink_writes_pairs() {
        let mut outputs = Outputs::declare(StdoutSink::to_writer(Vec::new())).unwrap();
        outputs.set_flag(OutputKey::Tagged, true).unwrap();
        let written = String::from_utf8(outputs.into_sink().into_inner()).unwrap();
        assert_eq!(
            written,
            "committed=false\ncommit_long_sha=\ncommit_sha=\npushed=false\ntagged=false\ntag_pushed=false\ntagged=true\n"
        );
    }
}

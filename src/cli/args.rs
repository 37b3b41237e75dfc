/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::tree::ErrorPolicy;

/// dirtree — print a directory's contents as an indented tree.
#[derive(Debug, Parser)]
#[command(
    name = "dirtree",
    about = "Print a directory's contents as an indented tree diagram",
    version
)]
pub struct Cli {
    /// Directory to render. Read from stdin (with a prompt) when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// What to do when a subdirectory cannot be read.
    #[arg(long, value_name = "POLICY", default_value = "fail")]
    pub on_error: OnError,

    /// Log progress to stderr (-v info, -vv debug with timings).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Indented tree diagram.
    #[default]
    Text,
    /// Nested JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one entry per line, pre-order).
    Ndjson,
    /// Full path only, one per line (for piping to other commands).
    Path,
}

impl OutputFormat {
    /// Whether this format emits JSON.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Compact | Self::Ndjson)
    }
}

/// Recovery policy for unreadable subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OnError {
    /// Stop at the first unreadable directory and exit non-zero.
    #[default]
    Fail,
    /// Mark the directory with `[error opening dir]` and keep going.
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Fail => Self::Fail,
            OnError::Skip => Self::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dirtree"]).unwrap();
        assert_eq!(cli.path, None);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.json);
        assert_eq!(cli.on_error, OnError::Fail);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "dirtree", "some/dir", "--output", "ndjson", "--on-error", "skip", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.path.as_deref(), Some(std::path::Path::new("some/dir")));
        assert_eq!(cli.output, OutputFormat::Ndjson);
        assert_eq!(ErrorPolicy::from(cli.on_error), ErrorPolicy::Skip);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(Cli::try_parse_from(["dirtree", "--json", "--output", "path"]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_accepted() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"caf\xe9".to_vec());
        let cli = Cli::try_parse_from([OsString::from("dirtree"), raw.clone()]).unwrap();
        assert_eq!(cli.path.map(PathBuf::into_os_string), Some(raw));
    }
}

/// Interactive root-path prompt.
use std::io::{BufRead, Write};

use crate::tree::TreeError;

/// Prompt shown when no path is given on the command line.
pub const PROMPT: &str = "Enter the path to the folder: ";

/// Print the prompt to `out`, read one line from `input` and return it trimmed.
///
/// End of input yields an empty string, which later fails root validation.
///
/// # Errors
///
/// Returns `TreeError::Output` if the prompt cannot be written and
/// `TreeError::Input` if reading fails.
pub fn ask_root<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, TreeError> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(TreeError::Input)?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_root_trims_and_prompts() {
        let mut input: &[u8] = b"  /tmp/some dir \t\nignored\n";
        let mut out = Vec::new();
        let root = ask_root(&mut input, &mut out).unwrap();
        assert_eq!(root, "/tmp/some dir");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_ask_root_eof_is_empty() {
        let mut input: &[u8] = b"";
        let mut out = Vec::new();
        assert_eq!(ask_root(&mut input, &mut out).unwrap(), "");
    }

    #[test]
    fn test_ask_root_invalid_utf8_is_input_error() {
        let mut input: &[u8] = b"\xff\xfe\n";
        let mut out = Vec::new();
        assert!(matches!(
            ask_root(&mut input, &mut out),
            Err(TreeError::Input(_))
        ));
    }
}

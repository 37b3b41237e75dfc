/// Streaming text renderer: writes the tree diagram while walking.
///
/// Nothing is retained between lines; the diagram is a side effect of a
/// depth-first, pre-order walk over sorted directory listings.
use std::io::Write;
use std::path::Path;

use super::entry::{Entry, read_sorted};
use super::errors::TreeError;
use super::options::{ErrorPolicy, WalkOptions};

/// Branch glyph for an entry with later siblings.
pub const TEE: &str = "├── ";
/// Branch glyph for the last entry of a directory.
pub const CORNER: &str = "└── ";
/// Prefix extension below a non-last directory.
pub const PIPE: &str = "│   ";
/// Prefix extension below a last directory.
pub const BLANK: &str = "    ";
/// Suffix appended to a directory that could not be listed (skip mode only).
pub const ERROR_MARKER: &str = "  [error opening dir]";

/// Write the root line followed by the full diagram for `root`.
///
/// `label` is printed verbatim as the first line.
///
/// # Errors
///
/// Returns `TreeError::FilesystemAccess` when a listing fails under the
/// fail-fast policy (or when the root itself fails), and `TreeError::Output`
/// when the sink rejects a write.
pub fn write_tree<W: Write>(
    label: &str,
    root: &Path,
    opts: &WalkOptions,
    out: &mut W,
) -> Result<(), TreeError> {
    writeln!(out, "{label}")?;
    print_tree(root, "", opts, out)?;
    out.flush()?;
    Ok(())
}

/// Print the entries of `dir`, each preceded by `prefix` and a branch glyph,
/// recursing into subdirectories.
///
/// # Errors
///
/// See [`write_tree`].
pub fn print_tree<W: Write>(
    dir: &Path,
    prefix: &str,
    opts: &WalkOptions,
    out: &mut W,
) -> Result<(), TreeError> {
    print_tree_with(dir, prefix, opts, out, &read_sorted)
}

/// [`print_tree`] with a custom directory listing function.
pub(crate) fn print_tree_with<W, L>(
    dir: &Path,
    prefix: &str,
    opts: &WalkOptions,
    out: &mut W,
    list: &L,
) -> Result<(), TreeError>
where
    W: Write,
    L: Fn(&Path) -> Result<Vec<Entry>, TreeError>,
{
    let entries = list(dir)?;
    print_entries(dir, &entries, prefix, opts, out, list)
}

fn print_entries<W, L>(
    dir: &Path,
    entries: &[Entry],
    prefix: &str,
    opts: &WalkOptions,
    out: &mut W,
    list: &L,
) -> Result<(), TreeError>
where
    W: Write,
    L: Fn(&Path) -> Result<Vec<Entry>, TreeError>,
{
    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { CORNER } else { TEE };
        let name = entry.display_name();

        if !entry.is_dir() {
            writeln!(out, "{prefix}{connector}{name}")?;
            continue;
        }

        // List before printing so skip mode can mark the line itself.
        let child_dir = entry.path_in(dir);
        match list(&child_dir) {
            Ok(children) => {
                writeln!(out, "{prefix}{connector}{name}")?;
                let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { PIPE });
                print_entries(&child_dir, &children, &child_prefix, opts, out, list)?;
            }
            Err(err) => match opts.on_error {
                ErrorPolicy::Skip => {
                    log::warn!("skipping: {err}");
                    writeln!(out, "{prefix}{connector}{name}{ERROR_MARKER}")?;
                }
                ErrorPolicy::Fail => {
                    writeln!(out, "{prefix}{connector}{name}")?;
                    return Err(err);
                }
            },
        }
    }
    Ok(())
}

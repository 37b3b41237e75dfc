/// Output formatting: text tree, JSON, NDJSON and path modes; error reporting.
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::args::{OnError, OutputFormat};
use crate::tree::printer::ERROR_MARKER;
use crate::tree::{ErrorPolicy, TreeError, WalkOptions};
use crate::types::{EntryOutput, ErrorOutput, TreeNodeOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all commands and formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub on_error: ErrorPolicy,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, on_error: OnError) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            on_error: on_error.into(),
        }
    }

    /// Walk options derived from the flags.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            on_error: self.on_error,
        }
    }
}

// --- Tree output ---

/// Write a built tree in one of the nested JSON formats.
///
/// # Errors
///
/// Returns an I/O or serialization error from the sink.
pub fn write_tree_json<W: Write>(
    tree: &TreeNodeOutput,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    if format == OutputFormat::Compact {
        write_compact_json(out, tree)
    } else {
        write_json(out, tree)
    }
}

/// Write flat entries as NDJSON, or as root-joined paths.
///
/// Path mode starts with the root label itself; directories that could not
/// be listed carry the same marker as in the text diagram.
///
/// # Errors
///
/// Returns an I/O or serialization error from the sink.
pub fn write_entries<W: Write>(
    label: &str,
    entries: &[EntryOutput],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Path => {
            writeln!(out, "{label}")?;
            for entry in entries {
                let marker = if entry.error.is_some() { ERROR_MARKER } else { "" };
                writeln!(out, "{}{marker}", Path::new(label).join(&entry.path).display())?;
            }
            Ok(())
        }
        _ => write_ndjson(out, entries),
    }
}

// --- Invalid root ---

/// Report an invalid root on stdout: the plain message in text and path
/// modes, the error envelope in JSON modes.
///
/// # Errors
///
/// Returns an I/O error from the sink.
pub fn write_invalid_root<W: Write>(
    err: &TreeError,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    if format.is_json() {
        let envelope = ErrorOutput::from_tree_error(err);
        if format == OutputFormat::Json {
            write_json(out, &envelope)
        } else {
            write_compact_json(out, &envelope)
        }
    } else {
        writeln!(out, "{err}")
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = format_error(err, format, &mut out);
}

fn format_error<W: Write>(err: &ErrorOutput, format: OutputFormat, out: &mut W) -> io::Result<()> {
    if format.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        writeln!(out, "{s}")
    } else {
        writeln!(out, "Error: {}", err.error.message)
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Created via [`timer`]. Visible with `-vv`.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

/// Start a named timer.
#[must_use]
pub fn timer(label: &'static str) -> DebugTimer {
    DebugTimer {
        label,
        start: std::time::Instant::now(),
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("{}: {ms:.2}ms", self.label);
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_compact_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn write_ndjson<W: Write, T: Serialize>(out: &mut W, values: &[T]) -> io::Result<()> {
    for v in values {
        write_compact_json(out, v)?;
    }
    Ok(())
}

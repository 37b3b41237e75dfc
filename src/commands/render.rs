/// Render command: validate the root and write it in the selected format.
use std::ffi::OsStr;
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::OutputFormat;
use crate::cli::output::{timer, write_entries, write_invalid_root, write_tree_json};
use crate::tree::{TreeError, build_tree, flatten, trim_path, validate_root, write_tree};
use crate::types::{EntryOutput, TreeNodeOutput};

/// Render the tree rooted at `raw_path` to `out`.
///
/// Surrounding whitespace is trimmed. The label line shows the path lossily
/// when it is not valid UTF-8. An invalid root is reported on `out` and is
/// not an error.
///
/// # Errors
///
/// Returns `TreeError::FilesystemAccess` when the walk fails under the
/// fail-fast policy, `TreeError::Output` when `out` rejects a write.
pub fn run<W: Write>(raw_path: &OsStr, ctx: &OutputCtx, out: &mut W) -> Result<(), TreeError> {
    let trimmed = trim_path(raw_path);
    let lossy = trimmed.to_string_lossy();
    let label: &str = &lossy;

    let root = match validate_root(trimmed) {
        Ok(root) => root,
        Err(err @ TreeError::InvalidRootPath { .. }) => {
            log::info!("not a directory: {label:?}");
            write_invalid_root(&err, ctx.format, out)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    log::info!("rendering {} as {:?}", root.display(), ctx.format);
    let opts = ctx.walk_options();

    if ctx.format == OutputFormat::Text {
        let _t_walk = timer("print_tree");
        return write_tree(label, &root, &opts, out);
    }

    let _t_build = timer("build_tree");
    let tree = build_tree(label, &root, &opts)?;
    drop(_t_build);

    match ctx.format {
        OutputFormat::Json | OutputFormat::Compact => {
            write_tree_json(&TreeNodeOutput::from(&tree), ctx.format, out)?;
        }
        _ => {
            let entries: Vec<EntryOutput> = flatten(&tree).into_iter().map(Into::into).collect();
            write_entries(label, &entries, ctx.format, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

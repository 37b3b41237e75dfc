/// In-memory tree builder for the structured output formats.
use std::path::{Path, PathBuf};

use super::entry::{Entry, EntryKind, read_sorted};
use super::errors::TreeError;
use super::options::{ErrorPolicy, WalkOptions};

/// A node in a built directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display name (the root keeps its label).
    pub name: String,
    /// Path relative to the root; empty for the root itself.
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
    /// Depth from the root (root = 0, its entries = 1).
    pub depth: usize,
    /// Sorted children (empty for non-directories and unreadable directories).
    pub children: Vec<Node>,
    /// Listing error, only set under the skip policy.
    pub error: Option<String>,
}

/// Build the full tree for `root`, labelled `label`.
///
/// Children are ordered exactly as the text printer orders them.
///
/// # Errors
///
/// Returns `TreeError::FilesystemAccess` if the root cannot be listed, or if
/// any subdirectory cannot be listed under the fail-fast policy.
pub fn build_tree(label: &str, root: &Path, opts: &WalkOptions) -> Result<Node, TreeError> {
    build_tree_with(label, root, opts, &read_sorted)
}

/// [`build_tree`] with a custom directory listing function.
pub(crate) fn build_tree_with<L>(
    label: &str,
    root: &Path,
    opts: &WalkOptions,
    list: &L,
) -> Result<Node, TreeError>
where
    L: Fn(&Path) -> Result<Vec<Entry>, TreeError>,
{
    let children = build_children(root, Path::new(""), 1, opts, list)?;
    Ok(Node {
        name: label.to_owned(),
        path: PathBuf::new(),
        kind: EntryKind::Dir,
        depth: 0,
        children,
        error: None,
    })
}

fn build_children<L>(
    dir: &Path,
    rel: &Path,
    depth: usize,
    opts: &WalkOptions,
    list: &L,
) -> Result<Vec<Node>, TreeError>
where
    L: Fn(&Path) -> Result<Vec<Entry>, TreeError>,
{
    let entries = list(dir)?;
    let mut nodes = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut node = Node {
            name: entry.display_name(),
            path: rel.join(&entry.name),
            kind: entry.kind,
            depth,
            children: Vec::new(),
            error: None,
        };

        if entry.is_dir() {
            match build_children(&entry.path_in(dir), &node.path, depth + 1, opts, list) {
                Ok(children) => node.children = children,
                Err(err @ TreeError::FilesystemAccess { .. })
                    if opts.on_error == ErrorPolicy::Skip =>
                {
                    log::warn!("skipping: {err}");
                    node.error = Some(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        nodes.push(node);
    }

    Ok(nodes)
}

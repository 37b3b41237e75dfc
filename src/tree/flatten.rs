/// Flatten a built tree into pre-order entries.
use std::path::PathBuf;

use super::build::Node;
use super::entry::EntryKind;

/// A flat representation of a tree entry (no children).
#[derive(Debug, Clone)]
pub struct FlatEntry {
    /// Display name.
    pub name: String,
    /// Path relative to the root.
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
    /// Depth (1 = direct child of the root).
    pub depth: usize,
    /// Whether this is the last entry of its directory.
    pub is_last: bool,
    /// Listing error for an unreadable directory (skip policy).
    pub error: Option<String>,
}

/// Flatten the entries below `root` (the root itself is not included).
///
/// Traversal is depth-first, pre-order (parent before children), matching
/// the line order of the text diagram.
#[must_use]
pub fn flatten(root: &Node) -> Vec<FlatEntry> {
    let mut result = Vec::new();
    flatten_children(&root.children, &mut result);
    result
}

fn flatten_children(nodes: &[Node], out: &mut Vec<FlatEntry>) {
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        out.push(FlatEntry {
            name: node.name.clone(),
            path: node.path.clone(),
            kind: node.kind,
            depth: node.depth,
            is_last: i + 1 == count,
            error: node.error.clone(),
        });
        flatten_children(&node.children, out);
    }
}

/// Shared serializable output types.
///
/// These types are what the structured formats write to stdout. They are
/// decoupled from the internal `Node` / `FlatEntry` types.
use serde::{Deserialize, Serialize};

use crate::tree::{EntryKind, FlatEntry, Node, TreeError};

/// A directory entry in tree representation (nested).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNodeOutput {
    /// Entry name (the root carries its label).
    pub name: String,
    /// Path relative to the root, empty for the root.
    pub path: String,
    /// `dir`, `file`, `symlink` or `other`.
    pub kind: EntryKind,
    /// Nested children, sorted.
    pub children: Vec<TreeNodeOutput>,
    /// Listing error for an unreadable directory, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Node> for TreeNodeOutput {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            path: node.path.to_string_lossy().into_owned(),
            kind: node.kind,
            children: node.children.iter().map(Self::from).collect(),
            error: node.error.clone(),
        }
    }
}

/// A directory entry in flat (list) representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutput {
    /// Entry name.
    pub name: String,
    /// Path relative to the root.
    pub path: String,
    /// `dir`, `file`, `symlink` or `other`.
    pub kind: EntryKind,
    /// Depth below the root (1 = direct child).
    pub depth: usize,
    /// Whether this is the last entry of its directory.
    pub is_last: bool,
    /// Listing error for an unreadable directory, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<FlatEntry> for EntryOutput {
    fn from(f: FlatEntry) -> Self {
        Self {
            name: f.name,
            path: f.path.to_string_lossy().into_owned(),
            kind: f.kind,
            depth: f.depth,
            is_last: f.is_last,
            error: f.error,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Path the error concerns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `TreeError`.
    #[must_use]
    pub fn from_tree_error(err: &TreeError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                path: err.path(),
            },
        }
    }
}

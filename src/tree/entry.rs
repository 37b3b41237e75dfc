/// Reading one directory level into sorted entries.
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::TreeError;

/// What kind of filesystem object an entry is.
///
/// Taken from the entry itself, so a symlink is a `Symlink` even when it
/// points at a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory; the only kind the walk descends into.
    Dir,
    /// A regular file.
    File,
    /// A symbolic link, whatever it points at.
    Symlink,
    /// Sockets, FIFOs, device nodes.
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw file name, used for ordering and for building child paths.
    pub name: OsString,
    /// Kind of the entry.
    pub kind: EntryKind,
}

impl Entry {
    /// Whether the walk should descend into this entry.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Display name. Non-UTF-8 bytes are replaced with U+FFFD.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Path of this entry inside `parent`.
    #[must_use]
    pub fn path_in(&self, parent: &Path) -> PathBuf {
        parent.join(&self.name)
    }
}

/// List the immediate entries of `dir`, sorted by raw name.
///
/// # Errors
///
/// Returns `TreeError::FilesystemAccess` if the directory, or any entry's
/// file type, cannot be read.
pub fn read_sorted(dir: &Path) -> Result<Vec<Entry>, TreeError> {
    let access = |source: std::io::Error| TreeError::FilesystemAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir).map_err(access)? {
        let dirent = dirent.map_err(access)?;
        let kind = dirent.file_type().map_err(access)?.into();
        entries.push(Entry {
            name: dirent.file_name(),
            kind,
        });
    }

    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    log::debug!("listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Strip surrounding whitespace from a user-supplied path.
///
/// Paths that are not valid UTF-8 are returned unchanged.
#[must_use]
pub fn trim_path(raw: &OsStr) -> &OsStr {
    raw.to_str().map_or(raw, |s| OsStr::new(s.trim()))
}

/// Check that `path` names an existing directory and return it as a `PathBuf`.
///
/// The root itself is resolved through symlinks.
///
/// # Errors
///
/// Returns `TreeError::InvalidRootPath` for a missing path or a non-directory.
pub fn validate_root(path: &OsStr) -> Result<PathBuf, TreeError> {
    let root = PathBuf::from(path);
    if !path.is_empty() && root.is_dir() {
        Ok(root)
    } else {
        Err(TreeError::InvalidRootPath {
            path: path.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(Entry::display_name).collect()
    }

    #[test]
    fn test_read_sorted_orders_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["b", "a", "c"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let entries = read_sorted(tmp.path()).unwrap();
        assert_eq!(names(&entries), ["a", "b", "c"]);
    }

    #[test]
    fn test_read_sorted_is_byte_order_not_case_folded() {
        let tmp = TempDir::new().unwrap();
        for name in ["beta", "Alpha", "_x", "Zed", "gamma"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let entries = read_sorted(tmp.path()).unwrap();
        assert_eq!(names(&entries), ["Alpha", "Zed", "_x", "beta", "gamma"]);
    }

    #[test]
    fn test_read_sorted_reports_kinds() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dir")).unwrap();
        fs::write(tmp.path().join("file"), "x").unwrap();
        let entries = read_sorted(tmp.path()).unwrap();
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].kind, EntryKind::File);
        assert!(!entries[1].is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_not_a_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();
        let entries = read_sorted(tmp.path()).unwrap();
        assert_eq!(names(&entries), ["link", "real"]);
        assert_eq!(entries[0].kind, EntryKind::Symlink);
        assert!(!entries[0].is_dir());
    }

    #[test]
    fn test_read_sorted_missing_dir_is_access_error() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone");
        let err = read_sorted(&gone).unwrap_err();
        match err {
            TreeError::FilesystemAccess { path, .. } => assert_eq!(path, gone),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_root() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        assert_eq!(validate_root(tmp.path().as_os_str()).unwrap(), tmp.path());

        for bad in [file.as_os_str(), OsStr::new(""), OsStr::new("/definitely/not/here")] {
            assert!(matches!(
                validate_root(bad),
                Err(TreeError::InvalidRootPath { .. })
            ));
        }
    }

    #[test]
    fn test_trim_path() {
        assert_eq!(trim_path(OsStr::new("  /tmp/a b \t\n")), OsStr::new("/tmp/a b"));
        assert_eq!(trim_path(OsStr::new("\u{a0}x\u{a0}")), OsStr::new("x"));
        assert_eq!(trim_path(OsStr::new("")), OsStr::new(""));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_root() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9");
        let dir = tmp.path().join(name);
        if fs::create_dir(&dir).is_err() {
            // Some filesystems insist on UTF-8 names.
            return;
        }
        let trimmed = trim_path(dir.as_os_str());
        assert_eq!(trimmed, dir.as_os_str());
        assert_eq!(validate_root(trimmed).unwrap(), dir);
    }
}

//! Filesystem entry types.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind of filesystem entry as the engine sees it.
///
/// Symbolic links are never followed; a symlink (or any other non-directory
/// object) is classified as a file-like leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file or other non-directory leaf.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a file-like leaf.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// A single listed filesystem entry with its snapshot size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Base name (no path separators).
    pub name: CompactString,

    /// Fully-qualified path, unique within its parent's listing.
    pub path: PathBuf,

    /// Entry kind.
    pub kind: EntryKind,

    /// Size in bytes. For files this is the stat size; for directories it is
    /// the recursive sum computed at listing time. A snapshot, not a live
    /// value: external filesystem changes are not tracked.
    pub size: u64,
}

impl Entry {
    /// Create a new file entry.
    pub fn new_file(name: impl Into<CompactString>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
            size,
        }
    }

    /// Create a new directory entry with its aggregated subtree size.
    pub fn new_directory(
        name: impl Into<CompactString>,
        path: impl Into<PathBuf>,
        size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Directory,
            size,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this entry is a file-like leaf.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_creation() {
        let entry = Entry::new_file("test.txt", "/data/test.txt", 1024);
        assert!(entry.is_file());
        assert!(!entry.is_dir());
        assert_eq!(entry.name.as_str(), "test.txt");
        assert_eq!(entry.size, 1024);
    }

    #[test]
    fn test_directory_entry_creation() {
        let entry = Entry::new_directory("sub", "/data/sub", 2048);
        assert!(entry.is_dir());
        assert!(!entry.is_file());
        assert_eq!(entry.path, PathBuf::from("/data/sub"));
    }

    #[test]
    fn test_kind_discrimination() {
        assert!(EntryKind::File.is_file());
        assert!(!EntryKind::File.is_dir());
        assert!(EntryKind::Directory.is_dir());
        assert!(!EntryKind::Directory.is_file());
    }
}

//! Single-entry classification.

use std::fs;
use std::path::Path;

/// Result of probing one filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// A file-like leaf with its byte size. Symlinks land here with the
    /// size of the link entry itself; they are never followed.
    File(u64),
    /// A real directory (not a symlink to one).
    Directory,
    /// The entry could not be stat'd: permission denied, vanished between
    /// listing and stat, or any other I/O failure.
    Inaccessible,
}

/// Classify a single path, obtaining the byte size for file-like entries.
///
/// Never returns an error: every metadata failure is folded into
/// [`ProbeResult::Inaccessible`]. Uses symlink-aware metadata so that
/// symlink loops cannot cause cycles during traversal.
pub fn probe(path: &Path) -> ProbeResult {
    match fs::symlink_metadata(path) {
        Ok(metadata) => {
            if metadata.file_type().is_dir() {
                ProbeResult::Directory
            } else {
                ProbeResult::File(metadata.len())
            }
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "probe failed");
            ProbeResult::Inaccessible
        }
    }
}

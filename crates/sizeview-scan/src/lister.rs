//! One-level directory listing with aggregated sizes.

use std::fs;
use std::path::Path;

use compact_str::CompactString;
use sizeview_core::{Entry, ScanConfig};

use crate::probe::{ProbeResult, probe};
use crate::sizer::SubtreeSizer;

/// Lists the immediate children of a directory, sorted by size descending.
///
/// This is the unit a caller materializes as one level of tree nodes.
#[derive(Debug, Clone)]
pub struct DirectoryLister {
    sizer: SubtreeSizer,
}

impl DirectoryLister {
    /// Create a lister with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            sizer: SubtreeSizer::new(config),
        }
    }

    /// Access the sizer this lister aggregates directory sizes with.
    pub fn sizer(&self) -> &SubtreeSizer {
        &self.sizer
    }

    /// List the immediate children of `path` as sorted entries.
    ///
    /// Never raises. A skip-listed directory, or one that cannot be
    /// enumerated at all, yields an empty listing. Children that cannot
    /// even be classified are omitted; a directory child that classifies
    /// but fails to enumerate its own contents appears with size 0.
    pub fn list(&self, path: &Path) -> Vec<Entry> {
        if self.sizer.config().is_skipped(path) {
            return Vec::new();
        }

        let dir = match fs::read_dir(path) {
            Ok(dir) => dir,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "listing failed");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for child in dir {
            let Ok(child) = child else { continue };
            let child_path = child.path();

            if self.sizer.config().is_skipped(&child_path) {
                continue;
            }

            let name = CompactString::new(child.file_name().to_string_lossy());
            match probe(&child_path) {
                ProbeResult::File(size) => {
                    entries.push(Entry::new_file(name, child_path, size));
                }
                ProbeResult::Directory => {
                    let size = self.sizer.size_of(&child_path);
                    entries.push(Entry::new_directory(name, child_path, size));
                }
                ProbeResult::Inaccessible => {
                    tracing::debug!(path = %child_path.display(), "unclassifiable entry omitted");
                }
            }
        }

        sort_entries(&mut entries);
        entries
    }
}

/// Sort entries by size descending. The sort is stable, so entries with
/// equal sizes keep their enumeration order; no secondary key is imposed.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.size.cmp(&a.size));
}

//! Recursive subtree size aggregation.

use std::fs;
use std::path::Path;

use sizeview_core::ScanConfig;

use crate::probe::{ProbeResult, probe};

/// Computes the total byte size of all files transitively under a directory.
///
/// Total fault isolation: one locked file or unreadable subfolder never
/// blanks out the rest of a scan. The cost is that a completely
/// inaccessible directory reports 0, indistinguishable from an empty one.
#[derive(Debug, Clone)]
pub struct SubtreeSizer {
    config: ScanConfig,
}

impl SubtreeSizer {
    /// Create a sizer with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Access the configuration this sizer applies.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Sum the sizes of all files transitively contained in `path`.
    ///
    /// Always succeeds. Skip-listed paths and directories that cannot be
    /// enumerated contribute 0; unreadable children are skipped.
    pub fn size_of(&self, path: &Path) -> u64 {
        self.size_at_depth(path, 0)
    }

    fn size_at_depth(&self, path: &Path, depth: u32) -> u64 {
        if self.config.is_skipped(path) {
            return 0;
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "cannot enumerate, counts as 0");
                return 0;
            }
        };

        let mut total: u64 = 0;
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let child = entry.path();

            match probe(&child) {
                ProbeResult::File(size) => total += size,
                ProbeResult::Directory => {
                    if self.config.within_depth(depth + 1) {
                        total += self.size_at_depth(&child, depth + 1);
                    }
                }
                ProbeResult::Inaccessible => {}
            }
        }

        total
    }
}

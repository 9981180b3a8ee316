//! Deletion with tree-consistent size refresh.

use std::fs;

use sizeview_core::DeleteError;
use sizeview_scan::SubtreeSizer;
use sizeview_tree::{EntryTree, NodeId};

/// Applies deletions to the filesystem and keeps the [`EntryTree`]'s
/// displayed totals consistent without a full re-scan.
#[derive(Debug, Clone, Default)]
pub struct MutationCoordinator;

impl MutationCoordinator {
    /// Create a coordinator.
    pub fn new() -> Self {
        Self
    }

    /// Delete the filesystem object behind a node and update the tree.
    ///
    /// Failure is atomic from the caller's perspective: on error neither
    /// the filesystem object nor the tree node is touched. On success the
    /// node (and its materialized subtree) is detached, and if it had a
    /// parent that parent's size is recomputed with a fresh subtree
    /// rescan, returned as `Some(new_size)`. A full rescan rather than an
    /// incremental subtraction keeps the total honest against size drift.
    /// The rescan uses the tree's own scan configuration, so the refreshed
    /// total honors the same skip list the listing applied. Top-level
    /// nodes have no ancestor to refresh and yield `Ok(None)`.
    pub fn delete(&self, tree: &mut EntryTree, id: NodeId) -> Result<Option<u64>, DeleteError> {
        let entry = tree.entry(id).ok_or(DeleteError::StaleHandle)?;
        let path = entry.path.clone();
        let is_dir = entry.is_dir();

        let removed = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|source| DeleteError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "deleted");

        let parent = tree.detach(id).ok_or(DeleteError::StaleHandle)?;
        let Some(parent_id) = parent else {
            return Ok(None);
        };

        let Some(parent_path) = tree.entry(parent_id).map(|e| e.path.clone()) else {
            return Ok(None);
        };
        let new_size = SubtreeSizer::new(tree.config().clone()).size_of(&parent_path);
        tree.refresh_size(parent_id, new_size);
        Ok(Some(new_size))
    }
}

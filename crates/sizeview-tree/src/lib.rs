//! Lazy entry tree for sizeview.
//!
//! Holds the visible hierarchy: one scanned root plus children that are
//! materialized on demand as a caller drills into subdirectories. Sizes
//! are snapshots taken at listing time.

mod node;
mod tree;

pub use node::{ChildState, NodeId, TreeNode};
pub use tree::EntryTree;

// Re-export core types for convenience
pub use sizeview_core::{Entry, EntryKind, RootError, ScanConfig};

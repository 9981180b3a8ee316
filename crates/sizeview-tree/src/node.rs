//! Tree node types.

use sizeview_core::Entry;

/// Unique handle for a node within an [`EntryTree`](crate::EntryTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Materialization state of a node's children.
///
/// Two explicit states rather than a sentinel empty list: "no children"
/// and "not yet scanned" are different things, and only the former may be
/// trusted for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildState {
    /// Children have not been listed yet. Initial state for every
    /// directory node; this is what keeps expansion O(visible subtree).
    Unmaterialized,
    /// Children were listed from the filesystem, in sorted order.
    Materialized(Vec<NodeId>),
}

impl ChildState {
    /// Check whether children have been materialized.
    pub fn is_materialized(&self) -> bool {
        matches!(self, ChildState::Materialized(_))
    }
}

/// A materialized position in the entry tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// The entry this node represents.
    pub entry: Entry,

    /// Back-reference used only to propagate size refresh upward after a
    /// mutation; `None` for top-level entries.
    pub parent: Option<NodeId>,

    /// Child handles. Files are created with an empty materialized list;
    /// directories start unmaterialized until first expansion.
    pub children: ChildState,
}

impl TreeNode {
    /// Create a node for an entry. Directory children start unmaterialized.
    pub fn new(entry: Entry, parent: Option<NodeId>) -> Self {
        let children = if entry.is_dir() {
            ChildState::Unmaterialized
        } else {
            ChildState::Materialized(Vec::new())
        };
        Self {
            entry,
            parent,
            children,
        }
    }

    /// Child handles, empty if not yet materialized.
    pub fn child_ids(&self) -> &[NodeId] {
        match &self.children {
            ChildState::Materialized(ids) => ids,
            ChildState::Unmaterialized => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_node_starts_unmaterialized() {
        let node = TreeNode::new(Entry::new_directory("sub", "/data/sub", 20), None);
        assert!(!node.children.is_materialized());
        assert!(node.child_ids().is_empty());
    }

    #[test]
    fn test_file_node_is_materialized_with_no_children() {
        let node = TreeNode::new(Entry::new_file("a.txt", "/data/a.txt", 10), Some(NodeId::new(0)));
        assert!(node.children.is_materialized());
        assert!(node.child_ids().is_empty());
        assert_eq!(node.parent, Some(NodeId::new(0)));
    }
}

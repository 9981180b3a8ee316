//! Lazy entry tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sizeview_core::{Entry, RootError, ScanConfig};
use sizeview_scan::DirectoryLister;

use crate::node::{ChildState, NodeId, TreeNode};

/// The in-memory representation of the currently-visible hierarchy: one
/// root directory plus on-demand-expanded children.
///
/// The tree exclusively owns every node reachable from its root, keyed by
/// [`NodeId`] handles. Children are either unmaterialized (never listed)
/// or materialized with snapshot sizes; expansion is lazy-one-shot, a
/// re-expand never re-scans.
#[derive(Debug)]
pub struct EntryTree {
    lister: DirectoryLister,
    nodes: HashMap<NodeId, TreeNode>,
    top: Vec<NodeId>,
    root_path: Option<PathBuf>,
    next_id: u64,
}

impl EntryTree {
    /// Create an empty tree using the given scan configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            lister: DirectoryLister::new(config),
            nodes: HashMap::new(),
            top: Vec::new(),
            root_path: None,
            next_id: 0,
        }
    }

    /// Set the root directory, replacing any existing state.
    ///
    /// Root selection is the one listing-side failure reported upward: the
    /// path must exist and be a directory. The returned handles are the
    /// top-level entries in size-descending order.
    pub fn set_root(&mut self, path: &Path) -> Result<&[NodeId], RootError> {
        let root_path = path.canonicalize().map_err(|e| RootError::io(path, e))?;
        if !root_path.is_dir() {
            return Err(RootError::NotADirectory { path: root_path });
        }

        self.nodes.clear();
        self.top.clear();
        self.next_id = 0;

        let entries = self.lister.list(&root_path);
        self.top = self.insert_entries(entries, None);
        self.root_path = Some(root_path);

        Ok(&self.top)
    }

    /// Materialize the children of a directory node.
    ///
    /// Idempotent: the first call lists the filesystem, every later call
    /// returns the already-materialized children without touching it.
    /// Expanding a file or an unknown handle yields an empty slice.
    pub fn expand(&mut self, id: NodeId) -> &[NodeId] {
        let needs_scan = match self.nodes.get(&id) {
            Some(node) => node.entry.is_dir() && !node.children.is_materialized(),
            None => return &[],
        };

        if needs_scan {
            let path = self.nodes[&id].entry.path.clone();
            tracing::debug!(path = %path.display(), "materializing children");
            let entries = self.lister.list(&path);
            let child_ids = self.insert_entries(entries, Some(id));
            if let Some(node) = self.nodes.get_mut(&id) {
                node.children = ChildState::Materialized(child_ids);
            }
        }

        self.nodes.get(&id).map(TreeNode::child_ids).unwrap_or(&[])
    }

    /// Top-level entry handles in listing order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top
    }

    /// The scan configuration this tree lists with.
    pub fn config(&self) -> &ScanConfig {
        self.lister.sizer().config()
    }

    /// The root path set by [`set_root`](Self::set_root), if any.
    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Look up a node's entry by handle.
    pub fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.nodes.get(&id).map(|n| &n.entry)
    }

    /// Check whether a handle still refers to a node in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of materialized nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a materialized node by its full path.
    pub fn find_by_path(&self, path: &Path) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.entry.path == path)
            .map(|(id, _)| *id)
    }

    /// Detach a node and its materialized descendants from the tree.
    ///
    /// Returns the node's former parent handle (`None` inner value for a
    /// top-level entry), or `None` if the handle was already stale. Used
    /// by the mutation coordinator after a successful filesystem delete.
    pub fn detach(&mut self, id: NodeId) -> Option<Option<NodeId>> {
        let parent = self.nodes.get(&id)?.parent;

        match parent {
            Some(pid) => {
                if let Some(parent_node) = self.nodes.get_mut(&pid)
                    && let ChildState::Materialized(kids) = &mut parent_node.children
                {
                    kids.retain(|k| *k != id);
                }
            }
            None => self.top.retain(|k| *k != id),
        }

        self.remove_subtree(id);
        Some(parent)
    }

    /// Overwrite a node's cached size after a recomputation.
    pub fn refresh_size(&mut self, id: NodeId, size: u64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.entry.size = size;
        }
    }

    fn insert_entries(&mut self, entries: Vec<Entry>, parent: Option<NodeId>) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = NodeId::new(self.next_id);
            self.next_id += 1;
            self.nodes.insert(id, TreeNode::new(entry, parent));
            ids.push(id);
        }
        ids
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id)
            && let ChildState::Materialized(kids) = node.children
        {
            for kid in kids {
                self.remove_subtree(kid);
            }
        }
    }
}

use std::fs;

use tempfile::TempDir;

use sizeview_tree::{EntryTree, RootError, ScanConfig};

fn tree() -> EntryTree {
    EntryTree::new(ScanConfig::default())
}

/// Fixture matching the canonical drill-down scenario: a 10-byte file next
/// to a subdirectory holding a 20-byte file.
fn data_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "0123456789").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/b.txt"), "01234567890123456789").unwrap();
    temp
}

#[test]
fn test_set_root_sorts_largest_first() {
    let temp = data_fixture();
    let mut tree = tree();

    let top: Vec<_> = tree.set_root(temp.path()).unwrap().to_vec();
    assert_eq!(top.len(), 2);

    let first = tree.entry(top[0]).unwrap();
    assert_eq!(first.name.as_str(), "sub");
    assert_eq!(first.size, 20);
    assert!(first.is_dir());

    let second = tree.entry(top[1]).unwrap();
    assert_eq!(second.name.as_str(), "a.txt");
    assert_eq!(second.size, 10);
    assert!(second.is_file());
}

#[test]
fn test_expand_materializes_one_level() {
    let temp = data_fixture();
    let mut tree = tree();

    let top: Vec<_> = tree.set_root(temp.path()).unwrap().to_vec();
    let sub = top[0];
    assert!(!tree.node(sub).unwrap().children.is_materialized());

    let kids: Vec<_> = tree.expand(sub).to_vec();
    assert_eq!(kids.len(), 1);
    let b = tree.entry(kids[0]).unwrap();
    assert_eq!(b.name.as_str(), "b.txt");
    assert_eq!(b.size, 20);
    assert_eq!(tree.node(kids[0]).unwrap().parent, Some(sub));
}

#[test]
fn test_expand_is_idempotent_and_does_not_rescan() {
    let temp = data_fixture();
    let mut tree = tree();

    let top: Vec<_> = tree.set_root(temp.path()).unwrap().to_vec();
    let sub = top[0];
    let first: Vec<_> = tree.expand(sub).to_vec();

    // A file created after materialization must not show up: expansion is
    // lazy-one-shot, not a live view.
    fs::write(temp.path().join("sub/late.txt"), "late").unwrap();
    let second: Vec<_> = tree.expand(sub).to_vec();

    assert_eq!(first, second);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_expand_file_or_stale_handle_is_noop() {
    let temp = data_fixture();
    let mut tree = tree();

    let top: Vec<_> = tree.set_root(temp.path()).unwrap().to_vec();
    let file = top[1];
    assert!(tree.expand(file).is_empty());

    let stale = sizeview_tree::NodeId::new(9999);
    assert!(tree.expand(stale).is_empty());
}

#[test]
fn test_set_root_rejects_bad_paths() {
    let temp = TempDir::new().unwrap();
    let mut tree = tree();

    let missing = temp.path().join("nope");
    assert!(matches!(
        tree.set_root(&missing),
        Err(RootError::NotFound { .. })
    ));

    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        tree.set_root(&file),
        Err(RootError::NotADirectory { .. })
    ));
}

#[test]
fn test_set_root_replaces_previous_state() {
    let first = data_fixture();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("only.txt"), "xyz").unwrap();

    let mut tree = tree();
    tree.set_root(first.path()).unwrap();
    let old_len = tree.len();
    assert!(old_len >= 2);

    let top: Vec<_> = tree.set_root(second.path()).unwrap().to_vec();
    assert_eq!(top.len(), 1);
    assert_eq!(tree.entry(top[0]).unwrap().name.as_str(), "only.txt");
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_detach_removes_subtree_and_reports_parent() {
    let temp = data_fixture();
    let mut tree = tree();

    let top: Vec<_> = tree.set_root(temp.path()).unwrap().to_vec();
    let sub = top[0];
    let kids: Vec<_> = tree.expand(sub).to_vec();

    let parent = tree.detach(kids[0]).unwrap();
    assert_eq!(parent, Some(sub));
    assert!(!tree.contains(kids[0]));
    assert!(tree.node(sub).unwrap().child_ids().is_empty());

    // Detaching a top-level node reports no parent and drops descendants.
    let parent = tree.detach(sub).unwrap();
    assert_eq!(parent, None);
    assert_eq!(tree.top_level().len(), 1);

    // Second detach of the same handle is stale.
    assert!(tree.detach(sub).is_none());
}

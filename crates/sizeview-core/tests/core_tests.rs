use std::path::PathBuf;

use sizeview_core::{Entry, EntryKind, RootError, ScanConfig};

#[test]
fn test_entry_serialization_round_trip() {
    let entry = Entry::new_directory("sub", "/data/sub", 4096);

    let json = serde_json::to_string(&entry).unwrap();
    let back: Entry = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name.as_str(), "sub");
    assert_eq!(back.path, PathBuf::from("/data/sub"));
    assert_eq!(back.kind, EntryKind::Directory);
    assert_eq!(back.size, 4096);
}

#[test]
fn test_skip_list_is_case_insensitive() {
    let config = ScanConfig::default();

    assert!(config.is_skipped(&PathBuf::from("C:\\$RECYCLE.BIN")));
    assert!(config.is_skipped(&PathBuf::from("c:\\$recycle.bin\\nested\\deep")));
    assert!(config.is_skipped(&PathBuf::from("E:\\System VOLUME Information")));
    assert!(!config.is_skipped(&PathBuf::from("/home/recycling-tips")));
}

#[test]
fn test_custom_skip_list_replaces_defaults() {
    let config = ScanConfig::builder()
        .skip_substrings(vec![".git".to_string()])
        .build()
        .unwrap();

    assert!(config.is_skipped(&PathBuf::from("/repo/.git/objects")));
    assert!(!config.is_skipped(&PathBuf::from("C:\\$Recycle.Bin")));
}

#[test]
fn test_config_serde_defaults() {
    let config: ScanConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.skip_substrings.len(), 2);
    assert_eq!(config.max_depth, None);
}

#[test]
fn test_root_error_messages() {
    let err = RootError::NotADirectory {
        path: PathBuf::from("/data/a.txt"),
    };
    assert!(err.to_string().contains("not a directory"));

    let err = RootError::io(
        "/gone",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(matches!(err, RootError::NotFound { .. }));
}

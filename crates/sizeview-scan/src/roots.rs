//! Discovery of top-level scan targets.

use std::path::PathBuf;

/// List available scan roots on this host.
///
/// Best-effort and never fails: on Windows this probes drive letters, on
/// Unix it returns `/` plus real mount points when `/proc/mounts` is
/// readable. Callers pick one of these as the argument to `set_root`.
pub fn available_roots() -> Vec<PathBuf> {
    platform_roots()
}

#[cfg(windows)]
fn platform_roots() -> Vec<PathBuf> {
    ('A'..='Z')
        .map(|letter| PathBuf::from(format!("{letter}:\\")))
        .filter(|drive| drive.exists())
        .collect()
}

#[cfg(not(windows))]
fn platform_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/")];

    if let Ok(mounts) = std::fs::read_to_string("/proc/mounts") {
        for line in mounts.lines() {
            let Some(mount_point) = line.split_whitespace().nth(1) else {
                continue;
            };
            if !is_pseudo_mount(mount_point) && !roots.iter().any(|r| r == &PathBuf::from(mount_point)) {
                roots.push(PathBuf::from(mount_point));
            }
        }
    }

    roots
}

#[cfg(not(windows))]
fn is_pseudo_mount(mount_point: &str) -> bool {
    mount_point == "/"
        || mount_point.starts_with("/proc")
        || mount_point.starts_with("/sys")
        || mount_point.starts_with("/dev")
        || mount_point.starts_with("/run")
}

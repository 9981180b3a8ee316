//! Directory size aggregation engine for sizeview.
//!
//! This crate walks directories synchronously and computes subtree sizes
//! under partial-failure conditions.
//!
//! # Overview
//!
//! - [`probe`] classifies one entry (file / directory / inaccessible)
//!   without ever raising.
//! - [`SubtreeSizer`] recursively sums file sizes under a directory,
//!   applying the skip list and absorbing every per-entry error.
//! - [`DirectoryLister`] produces one sorted level of [`Entry`] values,
//!   the unit a tree materializes on expansion.
//! - [`available_roots`] lists the host's top-level scan targets.
//!
//! # Example
//!
//! ```rust,no_run
//! use sizeview_scan::{DirectoryLister, ScanConfig};
//!
//! let lister = DirectoryLister::new(ScanConfig::default());
//! for entry in lister.list(std::path::Path::new("/var")) {
//!     println!("{:>12}  {}", entry.size, entry.name);
//! }
//! ```
//!
//! A size figure is a snapshot taken at listing time; external filesystem
//! changes are not tracked.

mod lister;
mod probe;
mod roots;
mod sizer;

pub use lister::{DirectoryLister, sort_entries};
pub use probe::{ProbeResult, probe};
pub use roots::available_roots;
pub use sizer::SubtreeSizer;

// Re-export core types for convenience
pub use sizeview_core::{Entry, EntryKind, RootError, ScanConfig};

//! Core types for sizeview.
//!
//! This crate provides the fundamental data structures shared across the
//! sizeview workspace: listed entries, scan configuration, and the error
//! types for root selection and deletion.

mod config;
mod entry;
mod error;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use entry::{Entry, EntryKind};
pub use error::{DeleteError, RootError};

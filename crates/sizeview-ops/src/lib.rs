//! Deletion coordinator for sizeview.
//!
//! The one destructive surface of the engine. Scanning errors degrade
//! silently; a failed delete is surfaced as an explicit error value, since
//! swallowing it would misrepresent system state.

mod delete;

pub use delete::MutationCoordinator;

// Re-export core types for convenience
pub use sizeview_core::{DeleteError, ScanConfig};

//! Scan configuration types.

use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for scanning and listing operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Lower-cased path substrings identifying OS-reserved trees that are
    /// excluded from scanning and size totals.
    #[builder(default = "default_skip_substrings()")]
    #[serde(default = "default_skip_substrings")]
    pub skip_substrings: Vec<String>,

    /// Maximum recursion depth for subtree sizing (None = unlimited).
    /// A directory at the limit contributes 0 to its parent's total.
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,
}

fn default_skip_substrings() -> Vec<String> {
    vec![
        "$recycle.bin".to_string(),
        "system volume information".to_string(),
    ]
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref subs) = self.skip_substrings {
            if subs.iter().any(|s| s.is_empty()) {
                return Err("Skip substrings cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Check if a path falls under the skip list.
    ///
    /// Matching is case-insensitive on the full path, so a skip substring
    /// excludes the whole subtree below any match.
    pub fn is_skipped(&self, path: &Path) -> bool {
        let lowered = path.to_string_lossy().to_lowercase();
        self.skip_substrings
            .iter()
            .any(|sub| lowered.contains(&sub.to_lowercase()))
    }

    /// Check whether recursion may continue below the given depth.
    pub fn within_depth(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_substrings: default_skip_substrings(),
            max_depth: None,
        }
    }
}

//! Share list persistence configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the share list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StoreConfig {
    /// Path to the JSON share list.
    #[serde(default = "default_path")]
    #[validate(length(min = 1))]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/shares.json".to_string()
}

use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding scores, settings and the ad flag.
    pub path: String,
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("storage path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "sequence_master_data.json".to_string(),
        }
    }
}

mod file_storage;
mod memory_storage;

use std::sync::Arc;

use crate::error::StorageError;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

pub const SETTINGS_KEY: &str = "pi_game_settings";
pub const BEST_SCORES_KEY: &str = "sequence_master_best_scores";
pub const AD_REMOVAL_KEY: &str = "sequence_master_ad_removal";

/// Flat string key-value store. Values are JSON text or plain flags.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

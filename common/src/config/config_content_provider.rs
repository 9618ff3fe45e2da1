use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::KeyValueStorage;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

/// Config content stored as one value of a [`KeyValueStorage`].
pub struct StorageKeyContentProvider<S: KeyValueStorage> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> StorageKeyContentProvider<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn clear(&self) -> Result<(), String> {
        self.storage
            .remove(self.key)
            .map_err(|e| format!("Failed to clear {}: {}", self.key, e))
    }
}

impl<S: KeyValueStorage> ConfigContentProvider for StorageKeyContentProvider<S> {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        self.storage
            .get(self.key)
            .map_err(|e| format!("Failed to read {}: {}", self.key, e))
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        self.storage
            .set(self.key, content)
            .map_err(|e| format!("Failed to write {}: {}", self.key, e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileContentConfigProvider::new(dir.path().join("absent.yaml"));
        assert_eq!(provider.get_config_content().unwrap(), None);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileContentConfigProvider::new(dir.path().join("config.yaml"));
        provider.set_config_content("a: 1\n").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("a: 1\n"));
    }

    #[test]
    fn test_storage_key_provider() {
        let storage = Arc::new(MemoryStorage::new());
        let provider = StorageKeyContentProvider::new(Arc::clone(&storage), "settings");
        assert_eq!(provider.get_config_content().unwrap(), None);

        provider.set_config_content("{}").unwrap();
        assert_eq!(storage.get("settings").unwrap().as_deref(), Some("{}"));

        provider.clear().unwrap();
        assert_eq!(provider.get_config_content().unwrap(), None);
    }
}

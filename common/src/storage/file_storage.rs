use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;
use crate::warn;

use super::KeyValueStorage;

/// Key-value storage backed by one JSON file holding a string-to-string map.
///
/// Every call re-reads the file so that edits made outside the process are
/// picked up; writes replace the whole file. A write over a file that does not
/// parse moves it to `<path>.corrupt` and starts from an empty map.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn modify<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Json(e)) => {
                warn!("Storage file {} is corrupt, starting over: {}", self.path.display(), e);
                self.set_aside_corrupt();
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        change(&mut values);
        self.write_all(&values)
    }

    /// Keeps an unreadable file next to the store so it is not silently lost.
    fn set_aside_corrupt(&self) {
        let mut aside = self.path.clone().into_os_string();
        aside.push(".corrupt");
        if let Err(e) = std::fs::rename(&self.path, &aside) {
            warn!("Failed to move corrupt storage file aside: {}", e);
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.modify(|values| {
            values.remove(key);
        })
    }
}

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    /// Cached config, loading it on first use. Missing content yields the default.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.lock();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.parse(&config_data)?;
            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    /// Deserializes and validates content already read from the provider, caching the result.
    pub fn load_from_content(&self, content: &str) -> Result<TConfig, String> {
        let config = self.parse(content)?;
        *self.lock() = Some(config.clone());
        Ok(config)
    }

    fn parse(&self, content: &str) -> Result<TConfig, String> {
        let config = self.config_serializer.deserialize(content)?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.lock() = Some(config.clone());
        Ok(())
    }

    /// Drops the cached value so the next read goes back to the provider.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<TConfig>> {
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::{JsonConfigSerializer, StorageKeyContentProvider};
    use crate::storage::{KeyValueStorage, MemoryStorage};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        volume: f32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { volume: 0.5 }
        }
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if (0.0..=1.0).contains(&self.volume) {
                Ok(())
            } else {
                Err(format!("volume {} out of range", self.volume))
            }
        }
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.yaml");
        let manager: ConfigManager<_, Sample> = ConfigManager::from_yaml_file(path.to_str().unwrap());
        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.yaml");
        let manager: ConfigManager<_, Sample> = ConfigManager::from_yaml_file(path.to_str().unwrap());
        manager.set_config(&Sample { volume: 0.25 }).unwrap();

        let reloaded: ConfigManager<_, Sample> = ConfigManager::from_yaml_file(path.to_str().unwrap());
        assert_eq!(reloaded.get_config().unwrap().volume, 0.25);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.yaml");
        std::fs::write(&path, "volume: 3.0\n").unwrap();
        let manager: ConfigManager<_, Sample> = ConfigManager::from_yaml_file(path.to_str().unwrap());
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));

        assert!(manager.set_config(&Sample { volume: -1.0 }).is_err());
    }

    #[test]
    fn test_load_from_content_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.yaml");
        let manager: ConfigManager<_, Sample> = ConfigManager::from_yaml_file(path.to_str().unwrap());

        assert!(manager.load_from_content("volume: 2.0\n").is_err());
        assert_eq!(manager.load_from_content("volume: 0.75\n").unwrap().volume, 0.75);
        assert_eq!(manager.get_config().unwrap().volume, 0.75);
    }

    #[test]
    fn test_json_in_storage_key() {
        let storage = Arc::new(MemoryStorage::new());
        let manager: ConfigManager<_, Sample, _> = ConfigManager::new(
            StorageKeyContentProvider::new(Arc::clone(&storage), "sample"),
            JsonConfigSerializer,
        );
        manager.set_config(&Sample { volume: 1.0 }).unwrap();
        assert_eq!(storage.get("sample").unwrap().as_deref(), Some(r#"{"volume":1.0}"#));

        storage.set("sample", r#"{"volume":0.0}"#).unwrap();
        assert_eq!(manager.get_config().unwrap().volume, 1.0);
        manager.invalidate();
        assert_eq!(manager.get_config().unwrap().volume, 0.0);
    }
}

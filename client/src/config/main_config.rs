use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::GameConfig;
use serde::{Deserialize, Serialize};

use super::{AudioConfig, StorageConfig};

const CONFIG_FILE_NAME: &str = "sequence_master_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub audio: AudioConfig,
    /// Game started when no mode is given on the command line.
    pub game: GameConfig,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;
        self.audio.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            audio: AudioConfig::default(),
            game: GameConfig::default(),
            use_log_prefix: false,
        }
    }
}

mod audio_config;
mod main_config;
mod storage_config;

pub use audio_config::AudioConfig;
pub use main_config::{Config, get_config_manager};
pub use storage_config::StorageConfig;

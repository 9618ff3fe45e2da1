use common::config::Validate;
use common::platform::DEFAULT_MUSIC_VOLUME;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct AudioConfig {
    pub volume: f32,
}

impl Validate for AudioConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!(
                "Music volume must be between 0 and 1, got {}",
                self.volume
            ));
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

/// Compact JSON, the format of records kept in key-value storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigSerializer;

impl JsonConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for JsonConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_json::to_string(config).map_err(|e| format!("Failed to serialize record: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to deserialize record: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameConfig;

    #[test]
    fn test_yaml_reads_grid_size_names() {
        let config: GameConfig = YamlConfigSerializer
            .deserialize("mode: colors\ndifficulty: hard\ngridSize: 4x4\n")
            .unwrap();
        assert_eq!(config.grid_size.side(), 4);
        assert!(config.pi_mode.is_none());
    }

    #[test]
    fn test_json_rejects_unknown_mode() {
        let result: Result<GameConfig, String> = JsonConfigSerializer
            .deserialize(r#"{"mode":"letters","difficulty":"easy","gridSize":"3x3"}"#);
        assert!(result.unwrap_err().starts_with("Failed to deserialize record"));
    }
}

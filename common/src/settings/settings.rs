use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::theme::{Theme, ThemeColors};

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub music_enabled: bool,
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::DEFAULT.as_str().to_string(),
            music_enabled: true,
            haptics_enabled: true,
        }
    }
}

impl Settings {
    pub fn colors(&self) -> ThemeColors {
        Theme::colors_for(&self.theme)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), String> {
        if self.theme.trim().is_empty() {
            return Err("theme must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_individually() {
        let settings: Settings = serde_json::from_str(r#"{"musicEnabled":false}"#).unwrap();
        assert_eq!(settings.theme, "orange");
        assert!(!settings.music_enabled);
        assert!(settings.haptics_enabled);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"theme":"orange","musicEnabled":true,"hapticsEnabled":true}"#);
    }

    #[test]
    fn test_empty_theme_is_invalid() {
        let settings = Settings {
            theme: " ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }
}

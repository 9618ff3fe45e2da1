use crate::config::{ConfigContentProvider, ConfigManager, JsonConfigSerializer, StorageKeyContentProvider};
use crate::games::{GameConfig, GameConfigPatch};
use crate::storage::{AD_REMOVAL_KEY, KeyValueStorage, SETTINGS_KEY};
use crate::{log, warn};

use super::settings::Settings;
use super::theme::{Theme, ThemeColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// User preferences, the active game configuration and the ad-removal flag.
///
/// Preferences and the flag are persisted; the game configuration lives only
/// for the process.
pub struct SettingsStore<S: KeyValueStorage + Clone> {
    manager: ConfigManager<StorageKeyContentProvider<S>, Settings, JsonConfigSerializer>,
    storage: S,
    settings: Settings,
    game_config: GameConfig,
    ads_removed: bool,
    state: LoadState,
}

impl<S: KeyValueStorage + Clone> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            manager: ConfigManager::new(
                StorageKeyContentProvider::new(storage.clone(), SETTINGS_KEY),
                JsonConfigSerializer,
            ),
            storage,
            settings: Settings::default(),
            game_config: GameConfig::default(),
            ads_removed: false,
            state: LoadState::Loading,
        }
    }

    /// Reads preferences and the ad flag. Bad records are cleared and replaced by
    /// defaults; a failed read only falls back to defaults and leaves the record alone.
    pub fn load(&mut self) -> &Settings {
        self.manager.invalidate();
        self.settings = match self.manager.content_provider().get_config_content() {
            Ok(Some(content)) => match self.manager.load_from_content(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Invalid settings record, using defaults: {}", e);
                    if let Err(e) = self.manager.content_provider().clear() {
                        warn!("{}", e);
                    }
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Failed to read settings, using defaults: {}", e);
                Settings::default()
            }
        };

        self.ads_removed = match self.storage.get(AD_REMOVAL_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Failed to read ad removal status: {}", e);
                false
            }
        };

        self.state = LoadState::Ready;
        log!(
            "Settings loaded: theme {}, music {}, haptics {}",
            self.settings.theme,
            self.settings.music_enabled,
            self.settings.haptics_enabled
        );
        &self.settings
    }

    pub fn save(&self) {
        if let Err(e) = self.manager.set_config(&self.settings) {
            warn!("Failed to save settings: {}", e);
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update_theme(&mut self, theme: Theme) {
        self.settings.theme = theme.as_str().to_string();
        self.save();
    }

    pub fn toggle_music(&mut self) -> bool {
        self.settings.music_enabled = !self.settings.music_enabled;
        self.save();
        self.settings.music_enabled
    }

    pub fn toggle_haptics(&mut self) -> bool {
        self.settings.haptics_enabled = !self.settings.haptics_enabled;
        self.save();
        self.settings.haptics_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.settings.music_enabled
    }

    pub fn haptics_enabled(&self) -> bool {
        self.settings.haptics_enabled
    }

    pub fn colors(&self) -> ThemeColors {
        self.settings.colors()
    }

    pub fn update_game_config(&mut self, patch: GameConfigPatch) {
        self.game_config.merge(patch);
    }

    /// Copy handed to a new session; later updates do not reach it.
    pub fn game_config(&self) -> GameConfig {
        self.game_config
    }

    pub fn ads_removed(&self) -> bool {
        self.ads_removed
    }

    pub fn set_ads_removed(&mut self, removed: bool) {
        self.ads_removed = removed;
        let value = if removed { "true" } else { "false" };
        if let Err(e) = self.storage.set(AD_REMOVAL_KEY, value) {
            warn!("Failed to save ad removal status: {}", e);
        }
    }
}

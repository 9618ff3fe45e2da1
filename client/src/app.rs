use std::path::PathBuf;
use std::sync::Arc;

use common::games::GameConfigPatch;
use common::log;
use common::platform::{AudioSession, NullAudioBackend};
use common::scores::{ScoreStore, SharedScoreStore};
use common::settings::SettingsStore;
use common::storage::FileStorage;

use crate::config::Config;

pub type Storage = Arc<FileStorage>;

/// Everything that outlives a single game: stores and the music session.
pub struct App {
    pub settings: SettingsStore<Storage>,
    pub scores: SharedScoreStore<Storage>,
    pub audio: AudioSession<NullAudioBackend>,
}

impl App {
    pub fn open(config: &Config, storage_path: Option<PathBuf>) -> Self {
        let path = storage_path.unwrap_or_else(|| PathBuf::from(&config.storage.path));
        log!("Using storage file {}", path.display());
        let storage: Storage = Arc::new(FileStorage::new(path));

        let mut settings = SettingsStore::new(Arc::clone(&storage));
        settings.load();
        settings.update_game_config(GameConfigPatch {
            mode: Some(config.game.mode),
            pi_mode: config.game.pi_mode,
            difficulty: Some(config.game.difficulty),
            grid_size: Some(config.game.grid_size),
        });

        let mut scores = ScoreStore::new(storage);
        scores.load();

        Self {
            settings,
            scores: SharedScoreStore::new(scores),
            audio: AudioSession::with_volume(NullAudioBackend::default(), config.audio.volume),
        }
    }
}

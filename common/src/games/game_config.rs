use serde::{Deserialize, Serialize};

use super::types::{Difficulty, GameMode, GridSize, PiMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi_mode: Option<PiMode>,
    pub difficulty: Difficulty,
    pub grid_size: GridSize,
}

/// Partial update for [`GameConfig`]; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfigPatch {
    pub mode: Option<GameMode>,
    pub pi_mode: Option<PiMode>,
    pub difficulty: Option<Difficulty>,
    pub grid_size: Option<GridSize>,
}

impl GameConfig {
    pub fn pi_mode_or_default(&self) -> PiMode {
        self.pi_mode.unwrap_or(PiMode::Sequence)
    }

    pub fn merge(&mut self, patch: GameConfigPatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(pi_mode) = patch.pi_mode {
            self.pi_mode = Some(pi_mode);
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(grid_size) = patch.grid_size {
            self.grid_size = grid_size;
        }
    }

    pub fn merged(mut self, patch: GameConfigPatch) -> Self {
        self.merge(patch);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Pi,
            pi_mode: Some(PiMode::Sequence),
            difficulty: Difficulty::Normal,
            grid_size: GridSize::Three,
        }
    }
}

use std::fmt;

use crate::error::GameError;
use crate::games::{GameConfig, GameMode, GridSize, PiMode};

/// Which best-score slot a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKey {
    Colors(GridSize),
    Numbers(GridSize),
    Pi,
    PiFree,
}

impl ScoreKey {
    pub fn for_config(config: &GameConfig) -> Result<Self, GameError> {
        Ok(match config.mode {
            GameMode::Colors => ScoreKey::Colors(config.grid_size),
            GameMode::Numbers => ScoreKey::Numbers(config.grid_size),
            GameMode::Pi => match config.pi_mode_or_default() {
                PiMode::Sequence => ScoreKey::Pi,
                PiMode::Free => ScoreKey::PiFree,
                PiMode::Learn => return Err(GameError::LearnModeHasNoSession),
            },
        })
    }

    pub fn mode(self) -> GameMode {
        match self {
            ScoreKey::Colors(_) => GameMode::Colors,
            ScoreKey::Numbers(_) => GameMode::Numbers,
            ScoreKey::Pi | ScoreKey::PiFree => GameMode::Pi,
        }
    }

    pub fn all() -> Vec<ScoreKey> {
        let mut keys: Vec<ScoreKey> = GridSize::ALL.iter().map(|&g| ScoreKey::Colors(g)).collect();
        keys.extend(GridSize::ALL.iter().map(|&g| ScoreKey::Numbers(g)));
        keys.push(ScoreKey::Pi);
        keys.push(ScoreKey::PiFree);
        keys
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreKey::Colors(grid) => write!(f, "colors ({})", grid),
            ScoreKey::Numbers(grid) => write!(f, "numbers ({})", grid),
            ScoreKey::Pi => write!(f, "pi"),
            ScoreKey::PiFree => write!(f, "pi (free)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Difficulty;

    fn config(mode: GameMode, pi_mode: Option<PiMode>) -> GameConfig {
        GameConfig {
            mode,
            pi_mode,
            difficulty: Difficulty::Normal,
            grid_size: GridSize::Four,
        }
    }

    #[test]
    fn test_key_for_config() {
        assert_eq!(
            ScoreKey::for_config(&config(GameMode::Colors, None)),
            Ok(ScoreKey::Colors(GridSize::Four))
        );
        assert_eq!(
            ScoreKey::for_config(&config(GameMode::Numbers, Some(PiMode::Free))),
            Ok(ScoreKey::Numbers(GridSize::Four))
        );
        assert_eq!(ScoreKey::for_config(&config(GameMode::Pi, None)), Ok(ScoreKey::Pi));
        assert_eq!(
            ScoreKey::for_config(&config(GameMode::Pi, Some(PiMode::Free))),
            Ok(ScoreKey::PiFree)
        );
        assert_eq!(
            ScoreKey::for_config(&config(GameMode::Pi, Some(PiMode::Learn))),
            Err(GameError::LearnModeHasNoSession)
        );
    }

    #[test]
    fn test_all_keys() {
        assert_eq!(ScoreKey::all().len(), 10);
    }
}

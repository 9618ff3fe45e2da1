use crate::games::{Difficulty, GameConfig, GameMode, GridSize};
use crate::log;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Error(String),
}

pub trait ShareSheet {
    fn share_text(&self, message: &str) -> ShareOutcome;
}

/// Logs the message instead of opening a share sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogShareSheet;

impl ShareSheet for LogShareSheet {
    fn share_text(&self, message: &str) -> ShareOutcome {
        log!("Share: {}", message);
        ShareOutcome::Shared
    }
}

/// What a shared score or challenge says about the game it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeData {
    pub mode: GameMode,
    pub score: u32,
    pub difficulty: Difficulty,
    /// Only grid modes mention the grid.
    pub grid_size: Option<GridSize>,
}

impl ChallengeData {
    pub fn new(config: &GameConfig, score: u32) -> Self {
        let grid_size = match config.mode {
            GameMode::Colors | GameMode::Numbers => Some(config.grid_size),
            GameMode::Pi => None,
        };
        Self {
            mode: config.mode,
            score,
            difficulty: config.difficulty,
            grid_size,
        }
    }

    pub fn score_message(&self) -> String {
        format!(
            "I reached {} in Sequence Master {} ({})!",
            self.achievement(),
            mode_title(self.mode),
            self.setup()
        )
    }

    pub fn challenge_message(&self) -> String {
        format!(
            "I reached {} in Sequence Master {} ({}). Can you beat me?",
            self.achievement(),
            mode_title(self.mode),
            self.setup()
        )
    }

    fn achievement(&self) -> String {
        match self.mode {
            GameMode::Pi if self.score == 1 => "1 digit of π".to_string(),
            GameMode::Pi => format!("{} digits of π", self.score),
            _ => format!("level {}", self.score),
        }
    }

    fn setup(&self) -> String {
        match self.grid_size {
            Some(grid) => format!("{}, {} grid", self.difficulty, grid),
            None => self.difficulty.to_string(),
        }
    }
}

fn mode_title(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Colors => "Colors",
        GameMode::Numbers => "Numbers",
        GameMode::Pi => "Pi",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::PiMode;

    #[test]
    fn test_grid_mode_message_mentions_grid() {
        let config = GameConfig {
            mode: GameMode::Colors,
            pi_mode: None,
            difficulty: Difficulty::Hard,
            grid_size: GridSize::Four,
        };
        let data = ChallengeData::new(&config, 12);
        assert_eq!(data.grid_size, Some(GridSize::Four));
        assert_eq!(
            data.challenge_message(),
            "I reached level 12 in Sequence Master Colors (hard, 4x4 grid). Can you beat me?"
        );
    }

    #[test]
    fn test_pi_message_counts_digits() {
        let config = GameConfig {
            mode: GameMode::Pi,
            pi_mode: Some(PiMode::Free),
            difficulty: Difficulty::Easy,
            grid_size: GridSize::Two,
        };
        let data = ChallengeData::new(&config, 42);
        assert_eq!(data.grid_size, None);
        assert_eq!(data.score_message(), "I reached 42 digits of π in Sequence Master Pi (easy)!");
    }
}

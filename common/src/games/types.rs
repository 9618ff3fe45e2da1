use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Colors,
    Numbers,
    Pi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiMode {
    Sequence,
    Free,
    Learn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridSize {
    #[serde(rename = "2x2")]
    Two,
    #[serde(rename = "3x3")]
    Three,
    #[serde(rename = "4x4")]
    Four,
    #[serde(rename = "5x5")]
    Five,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Input,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    Correct,
    Incorrect,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Colors, GameMode::Numbers, GameMode::Pi];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Colors => "colors",
            GameMode::Numbers => "numbers",
            GameMode::Pi => "pi",
        }
    }
}

impl PiMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PiMode::Sequence => "sequence",
            PiMode::Free => "free",
            PiMode::Learn => "learn",
        }
    }
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl GridSize {
    pub const ALL: [GridSize; 4] = [GridSize::Two, GridSize::Three, GridSize::Four, GridSize::Five];

    pub fn side(self) -> u8 {
        match self {
            GridSize::Two => 2,
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    pub fn cell_count(self) -> u8 {
        self.side() * self.side()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GridSize::Two => "2x2",
            GridSize::Three => "3x3",
            GridSize::Four => "4x4",
            GridSize::Five => "5x5",
        }
    }
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Showing => "showing",
            Phase::Input => "input",
            Phase::Result => "result",
        }
    }
}

macro_rules! impl_display_and_parse {
    ($type:ty, $field:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $type {
            type Err = GameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| GameError::InvalidConfig {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_display_and_parse!(GameMode, "mode", [GameMode::Colors, GameMode::Numbers, GameMode::Pi]);
impl_display_and_parse!(PiMode, "pi mode", [PiMode::Sequence, PiMode::Free, PiMode::Learn]);
impl_display_and_parse!(Difficulty, "difficulty", [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]);
impl_display_and_parse!(GridSize, "grid size", [GridSize::Two, GridSize::Three, GridSize::Four, GridSize::Five]);

use serde::{Deserialize, Serialize};

use crate::games::GridSize;

use super::score_key::ScoreKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GridScoresRepr")]
pub struct GridScores {
    #[serde(rename = "2x2")]
    pub two: u32,
    #[serde(rename = "3x3")]
    pub three: u32,
    #[serde(rename = "4x4")]
    pub four: u32,
    #[serde(rename = "5x5")]
    pub five: u32,
}

// Older records stored one number per mode, which was the 3x3 grid.
#[derive(Deserialize)]
#[serde(untagged)]
enum GridScoresRepr {
    Single(u32),
    PerGrid {
        #[serde(rename = "2x2", default)]
        two: u32,
        #[serde(rename = "3x3", default)]
        three: u32,
        #[serde(rename = "4x4", default)]
        four: u32,
        #[serde(rename = "5x5", default)]
        five: u32,
    },
}

impl From<GridScoresRepr> for GridScores {
    fn from(repr: GridScoresRepr) -> Self {
        match repr {
            GridScoresRepr::Single(three) => GridScores {
                three,
                ..Default::default()
            },
            GridScoresRepr::PerGrid { two, three, four, five } => GridScores {
                two,
                three,
                four,
                five,
            },
        }
    }
}

impl GridScores {
    pub fn get(&self, grid: GridSize) -> u32 {
        match grid {
            GridSize::Two => self.two,
            GridSize::Three => self.three,
            GridSize::Four => self.four,
            GridSize::Five => self.five,
        }
    }

    fn slot_mut(&mut self, grid: GridSize) -> &mut u32 {
        match grid {
            GridSize::Two => &mut self.two,
            GridSize::Three => &mut self.three,
            GridSize::Four => &mut self.four,
            GridSize::Five => &mut self.five,
        }
    }
}

/// Persisted best scores. All zeros by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScores {
    pub colors: GridScores,
    pub numbers: GridScores,
    pub pi: u32,
    #[serde(default)]
    pub pi_free: u32,
}

impl BestScores {
    pub fn get(&self, key: ScoreKey) -> u32 {
        match key {
            ScoreKey::Colors(grid) => self.colors.get(grid),
            ScoreKey::Numbers(grid) => self.numbers.get(grid),
            ScoreKey::Pi => self.pi,
            ScoreKey::PiFree => self.pi_free,
        }
    }

    /// Raises the slot to `candidate` if it beats the stored value.
    pub fn raise(&mut self, key: ScoreKey, candidate: u32) -> bool {
        let slot = match key {
            ScoreKey::Colors(grid) => self.colors.slot_mut(grid),
            ScoreKey::Numbers(grid) => self.numbers.slot_mut(grid),
            ScoreKey::Pi => &mut self.pi,
            ScoreKey::PiFree => &mut self.pi_free,
        };
        if candidate > *slot {
            *slot = candidate;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_all_zero() {
        let json = serde_json::to_value(BestScores::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "colors": {"2x2": 0, "3x3": 0, "4x4": 0, "5x5": 0},
                "numbers": {"2x2": 0, "3x3": 0, "4x4": 0, "5x5": 0},
                "pi": 0,
                "piFree": 0
            })
        );
    }

    #[test]
    fn test_raise_is_monotonic() {
        let mut scores = BestScores::default();
        assert!(scores.raise(ScoreKey::Pi, 4));
        assert!(!scores.raise(ScoreKey::Pi, 4));
        assert!(!scores.raise(ScoreKey::Pi, 2));
        assert_eq!(scores.get(ScoreKey::Pi), 4);
    }

    #[test]
    fn test_grid_slots_are_independent() {
        let mut scores = BestScores::default();
        scores.raise(ScoreKey::Colors(GridSize::Two), 9);
        assert_eq!(scores.get(ScoreKey::Colors(GridSize::Two)), 9);
        assert_eq!(scores.get(ScoreKey::Colors(GridSize::Three)), 0);
        assert_eq!(scores.get(ScoreKey::Numbers(GridSize::Two)), 0);
    }

    #[test]
    fn test_legacy_single_value_maps_to_three_by_three() {
        let scores: BestScores =
            serde_json::from_str(r#"{"colors": 6, "numbers": {"4x4": 2}, "pi": 11}"#).unwrap();
        assert_eq!(scores.colors.three, 6);
        assert_eq!(scores.colors.two, 0);
        assert_eq!(scores.numbers.four, 2);
        assert_eq!(scores.pi, 11);
        assert_eq!(scores.pi_free, 0);
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(serde_json::from_str::<BestScores>(r#"{"colors": -1, "numbers": 0, "pi": 0}"#).is_err());
    }
}

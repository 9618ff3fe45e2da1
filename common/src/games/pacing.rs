use std::time::Duration;

use super::types::{Difficulty, GameMode};

pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1500);
pub const NUMBERS_LEAD_OUT: Duration = Duration::from_millis(500);

/// Timing of the replay while a session is in the showing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub show: Duration,
    pub pause: Duration,
    /// Extra wait after the last element's pause before input opens.
    pub lead_out: Duration,
}

impl Pacing {
    pub fn for_mode(mode: GameMode, difficulty: Difficulty) -> Self {
        match mode {
            GameMode::Colors => grid_pacing(difficulty, Duration::ZERO),
            GameMode::Numbers => grid_pacing(difficulty, NUMBERS_LEAD_OUT),
            GameMode::Pi => {
                let per_digit = Duration::from_millis(match difficulty {
                    Difficulty::Easy => 1000,
                    Difficulty::Normal => 800,
                    Difficulty::Hard => 600,
                });
                Self {
                    show: per_digit,
                    pause: Duration::ZERO,
                    lead_out: per_digit,
                }
            }
        }
    }

    pub fn replay_duration(&self, len: usize) -> Duration {
        if len == 0 {
            return Duration::ZERO;
        }
        (self.show + self.pause) * len as u32 + self.lead_out
    }
}

fn grid_pacing(difficulty: Difficulty, lead_out: Duration) -> Pacing {
    let (show, pause) = match difficulty {
        Difficulty::Easy => (800, 300),
        Difficulty::Normal => (600, 200),
        Difficulty::Hard => (400, 150),
    };
    Pacing {
        show: Duration::from_millis(show),
        pause: Duration::from_millis(pause),
        lead_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pacing_table() {
        let easy = Pacing::for_mode(GameMode::Colors, Difficulty::Easy);
        assert_eq!(easy.show, Duration::from_millis(800));
        assert_eq!(easy.pause, Duration::from_millis(300));

        let hard = Pacing::for_mode(GameMode::Numbers, Difficulty::Hard);
        assert_eq!(hard.show, Duration::from_millis(400));
        assert_eq!(hard.pause, Duration::from_millis(150));
        assert_eq!(hard.lead_out, NUMBERS_LEAD_OUT);
    }

    #[test]
    fn test_pi_uses_flat_delay() {
        let pacing = Pacing::for_mode(GameMode::Pi, Difficulty::Normal);
        assert_eq!(pacing.show, Duration::from_millis(800));
        assert_eq!(pacing.pause, Duration::ZERO);
    }

    #[test]
    fn test_replay_duration() {
        let pacing = Pacing::for_mode(GameMode::Colors, Difficulty::Normal);
        // every element is followed by its pause
        assert_eq!(pacing.replay_duration(3), Duration::from_millis(2400));
        assert_eq!(pacing.replay_duration(0), Duration::ZERO);

        let numbers = Pacing::for_mode(GameMode::Numbers, Difficulty::Normal);
        assert_eq!(numbers.replay_duration(3), Duration::from_millis(2900));

        let pi = Pacing::for_mode(GameMode::Pi, Difficulty::Easy);
        assert_eq!(pi.replay_duration(2), Duration::from_millis(3000));
    }
}

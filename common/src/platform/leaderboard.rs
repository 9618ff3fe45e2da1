use crate::games::GameMode;
use crate::log;
use crate::scores::{BestScores, ScoreKey};

use super::Capability;

const IOS_ONLY: &str = "Game Center is only available on iOS devices with a native build of the app.";

pub fn leaderboard_id(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Colors => "com.sequencemaster.colors.leaderboard",
        GameMode::Numbers => "com.sequencemaster.numbers.leaderboard",
        GameMode::Pi => "com.sequencemaster.pi.leaderboard",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstWin,
    Score10,
    Score20,
    Score50,
    MasterAll,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstWin,
        Achievement::Score10,
        Achievement::Score20,
        Achievement::Score50,
        Achievement::MasterAll,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstWin => "com.sequencemaster.achievement.firstwin",
            Achievement::Score10 => "com.sequencemaster.achievement.score10",
            Achievement::Score20 => "com.sequencemaster.achievement.score20",
            Achievement::Score50 => "com.sequencemaster.achievement.score50",
            Achievement::MasterAll => "com.sequencemaster.achievement.masterall",
        }
    }

    /// Achievements the given records qualify for.
    ///
    /// Master-all needs a best of at least 10 in each of the three modes.
    pub fn unlocked_by(scores: &BestScores) -> Vec<Achievement> {
        let mode_best = |mode: GameMode| {
            ScoreKey::all()
                .into_iter()
                .filter(|key| key.mode() == mode)
                .map(|key| scores.get(key))
                .max()
                .unwrap_or(0)
        };
        let per_mode = GameMode::ALL.map(mode_best);
        let top = per_mode.iter().copied().max().unwrap_or(0);

        let mut unlocked = Vec::new();
        if top >= 1 {
            unlocked.push(Achievement::FirstWin);
        }
        for (threshold, achievement) in [(10, Achievement::Score10), (20, Achievement::Score20), (50, Achievement::Score50)] {
            if top >= threshold {
                unlocked.push(achievement);
            }
        }
        if per_mode.iter().all(|&best| best >= 10) {
            unlocked.push(Achievement::MasterAll);
        }
        unlocked
    }
}

pub trait Leaderboard {
    fn initialize(&mut self) -> Capability<()>;
    fn submit_score(&mut self, mode: GameMode, score: u32) -> Capability<()>;
    /// `None` shows every board.
    fn show(&mut self, mode: Option<GameMode>) -> Capability<()>;
    fn unlock(&mut self, achievement: Achievement) -> Capability<()>;
}

/// Leaderboards on a platform without Game Center.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedLeaderboard;

impl Leaderboard for UnsupportedLeaderboard {
    fn initialize(&mut self) -> Capability<()> {
        log!("Game Center is not available on this platform");
        Capability::not_available(IOS_ONLY)
    }

    fn submit_score(&mut self, mode: GameMode, score: u32) -> Capability<()> {
        log!("Score {} not submitted to {}", score, leaderboard_id(mode));
        Capability::not_available(IOS_ONLY)
    }

    fn show(&mut self, mode: Option<GameMode>) -> Capability<()> {
        log!(
            "Leaderboard requested for {}",
            mode.map_or("all modes", leaderboard_id)
        );
        Capability::not_available(IOS_ONLY)
    }

    fn unlock(&mut self, achievement: Achievement) -> Capability<()> {
        log!("Achievement {} not unlocked", achievement.id());
        Capability::not_available(IOS_ONLY)
    }
}

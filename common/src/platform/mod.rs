//! Device capabilities the game talks to but does not implement: music,
//! haptics, the share sheet, store purchases and leaderboards.

mod audio;
mod haptics;
mod leaderboard;
mod purchases;
mod share;

pub use audio::{AudioBackend, AudioSession, DEFAULT_MUSIC_VOLUME, MusicGuard, MusicTrack, NullAudioBackend};
pub use haptics::{HapticPulse, Haptics, NullHaptics, PulseStyle};
pub use leaderboard::{Achievement, Leaderboard, UnsupportedLeaderboard, leaderboard_id};
pub use purchases::{PurchaseService, REMOVE_ADS_PRODUCT, UnsupportedPurchases};
pub use share::{ChallengeData, LogShareSheet, ShareOutcome, ShareSheet};

/// Result of asking the platform for something it may not support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<T> {
    Available(T),
    NotAvailable { message: String },
}

impl<T> Capability<T> {
    pub fn not_available(message: impl Into<String>) -> Self {
        Capability::NotAvailable {
            message: message.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn available(self) -> Option<T> {
        match self {
            Capability::Available(value) => Some(value),
            Capability::NotAvailable { .. } => None,
        }
    }
}

use std::future::Future;

use tokio::sync::mpsc;

use crate::scores::ScoreKey;

use super::types::{Outcome, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LevelStarted { level: usize, phase: Phase },
    Highlight { position: usize, element: u8 },
    HighlightCleared { position: usize },
    InputOpened { expected: usize },
    InputAccepted { element: u8, progress: usize },
    InputRemoved { progress: usize },
    Rejected { reason: String },
    Finished {
        key: ScoreKey,
        outcome: Outcome,
        score: u32,
        new_record: bool,
        auto_advance: bool,
    },
    /// The sequence covered its whole source; there is no next level.
    Completed { level: usize },
}

pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast(&self, event: SessionEvent) -> impl Future<Output = ()> + Send;
}

impl SessionBroadcaster for mpsc::UnboundedSender<SessionEvent> {
    async fn broadcast(&self, event: SessionEvent) {
        // receiver gone means the screen was closed
        let _ = self.send(event);
    }
}

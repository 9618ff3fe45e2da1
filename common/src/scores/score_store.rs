use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::storage::{BEST_SCORES_KEY, KeyValueStorage};
use crate::{log, warn};

use super::best_scores::BestScores;
use super::score_key::ScoreKey;

/// Receives final session scores. Returns whether a new record was set.
pub trait ScoreRecorder: Send + Sync + Clone + 'static {
    fn record(&self, key: ScoreKey, score: u32) -> impl Future<Output = bool> + Send;
}

pub struct ScoreStore<S: KeyValueStorage> {
    storage: S,
    scores: BestScores,
}

impl<S: KeyValueStorage> ScoreStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            scores: BestScores::default(),
        }
    }

    /// Reads the persisted record. Missing or malformed data degrades to all zeros.
    pub fn load(&mut self) -> &BestScores {
        self.scores = match self.storage.get(BEST_SCORES_KEY) {
            Ok(Some(content)) if content.trim().is_empty() => BestScores::default(),
            Ok(Some(content)) => match serde_json::from_str::<BestScores>(&content) {
                Ok(scores) => scores,
                Err(e) => {
                    warn!("Invalid best scores record, resetting to defaults: {}", e);
                    if let Err(e) = self.storage.remove(BEST_SCORES_KEY) {
                        warn!("Failed to clear invalid best scores: {}", e);
                    }
                    BestScores::default()
                }
            },
            Ok(None) => BestScores::default(),
            Err(e) => {
                warn!("Failed to read best scores: {}", e);
                BestScores::default()
            }
        };
        &self.scores
    }

    pub fn update(&mut self, key: ScoreKey, candidate: u32) -> bool {
        let current = self.scores.get(key);
        if !self.scores.raise(key, candidate) {
            return false;
        }
        log!("New best for {}: {} (was {})", key, candidate, current);
        self.persist();
        true
    }

    pub fn reset(&mut self) {
        self.scores = BestScores::default();
        self.persist();
        log!("Best scores reset");
    }

    pub fn best(&self, key: ScoreKey) -> u32 {
        self.scores.get(key)
    }

    pub fn scores(&self) -> &BestScores {
        &self.scores
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.scores)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                self.storage
                    .set(BEST_SCORES_KEY, &content)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            warn!("Failed to save best scores: {}", e);
        }
    }
}

/// A [`ScoreStore`] shared between the composition root and running sessions.
pub struct SharedScoreStore<S: KeyValueStorage> {
    inner: Arc<Mutex<ScoreStore<S>>>,
}

impl<S: KeyValueStorage> SharedScoreStore<S> {
    pub fn new(store: ScoreStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn best(&self, key: ScoreKey) -> u32 {
        self.inner.lock().await.best(key)
    }

    pub async fn scores(&self) -> BestScores {
        *self.inner.lock().await.scores()
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset();
    }
}

impl<S: KeyValueStorage> Clone for SharedScoreStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage + 'static> ScoreRecorder for SharedScoreStore<S> {
    async fn record(&self, key: ScoreKey, score: u32) -> bool {
        self.inner.lock().await.update(key, score)
    }
}

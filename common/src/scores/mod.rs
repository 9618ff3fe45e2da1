mod best_scores;
mod score_key;
mod score_store;

pub use best_scores::{BestScores, GridScores};
pub use score_key::ScoreKey;
pub use score_store::{ScoreRecorder, ScoreStore, SharedScoreStore};

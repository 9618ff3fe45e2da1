mod broadcaster;
mod engine;
mod game_config;
mod pacing;
mod session;
mod session_rng;
mod strategy;
mod types;

pub mod pi;

pub use broadcaster::{SessionBroadcaster, SessionEvent};
pub use engine::{EngineCommand, GameSessionEngine, SessionHandle, SessionSummary};
pub use game_config::{GameConfig, GameConfigPatch};
pub use pacing::{AUTO_ADVANCE_DELAY, NUMBERS_LEAD_OUT, Pacing};
pub use session::{AdvancePolicy, InputStep, ScoringStyle, SequenceSession};
pub use session_rng::SessionRng;
pub use strategy::{PiDigits, RandomCells, SequenceStrategy};
pub use types::{Difficulty, GameMode, GridSize, Outcome, Phase, PiMode};

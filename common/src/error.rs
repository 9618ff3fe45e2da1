use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidConfig { field: &'static str, value: String },

    #[error("Level is outside the playable range")]
    InvalidLevel,

    #[error("Element {element} is outside the valid range 0..{range}")]
    ElementOutOfRange { element: u8, range: u8 },

    #[error("Pi learn mode is a reading mode and has no game session")]
    LearnModeHasNoSession,

    #[error("Action not allowed in the {0} phase")]
    WrongPhase(&'static str),

    #[error("Session engine has stopped")]
    EngineStopped,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

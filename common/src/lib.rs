pub mod config;
pub mod error;
pub mod games;
pub mod logger;
pub mod platform;
pub mod scores;
pub mod settings;
pub mod storage;

pub use error::{GameError, StorageError};

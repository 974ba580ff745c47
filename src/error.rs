//! Crate error type
//!
//! The simulation itself never fails; only the collaborators around it
//! (config loading, high-score storage) can.

use thiserror::Error;

/// Errors raised by config loading and high-score persistence
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backing storage is missing (e.g. LocalStorage disabled)
    #[error("storage unavailable")]
    StorageUnavailable,

    /// Config values that would break the simulation
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Backend-agnostic storage failures surfaced through [`PlayerStore`](super::player_store::PlayerStore).

use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by player stores regardless of where players are kept.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached or failed mid-operation.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What the store was doing when it failed.
        message: String,
        /// Backend-specific cause.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The store already holds as many players as it is allowed to.
    #[error("player store is full ({limit} players)")]
    CapacityExceeded {
        /// Configured maximum number of players.
        limit: usize,
    },
}

impl StorageError {
    /// Wrap a backend failure that made the store unreachable.
    pub fn unavailable(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

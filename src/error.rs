//! Errors returned by the movie store

use thiserror::Error;

/// Errors that can occur while operating on the movie collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No movie with this id exists in the collection
    #[error("movie not found: {0}")]
    NotFound(String),

    /// Every id in the generator's space is already assigned
    #[error("no free movie id left in a space of {0}")]
    IdSpaceExhausted(u32),

    /// A writer panicked while holding the collection lock
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

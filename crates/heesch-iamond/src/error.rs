//! Error types for heesch-iamond.

use thiserror::Error;

/// Result type for heesch-iamond operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading hex records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A token was not an integer.
    #[error("invalid integer token {token:?}")]
    InvalidToken { token: String },

    /// An integer too large for the iamond embedding.
    #[error("coordinate {token} outside supported range ±{max}")]
    CoordinateOutOfRange { token: String, max: i64 },

    /// Coordinates come in pairs.
    #[error("expected an even number of integers, got {count}")]
    OddTokenCount { count: usize },
}

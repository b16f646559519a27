//! Error types for the repository crate.
//! Consolidates error conditions raised by store operations.
use thiserror::Error;

/// Represents errors that can occur within the repositories.
///
/// Wraps SQLx failures and the decoding errors raised when a stored
/// discriminant does not map back onto a domain type.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid vote type: {0}")]
    InvalidVoteType(i16),

    #[error("Invalid target type: {0}")]
    InvalidTargetType(i16),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

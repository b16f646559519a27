//! Error type shared by the question, answer, and session services.
use thiserror::Error;

use spectachat_repository::RepositoryError;

/// Represents the ways a service call can be refused or fail.
///
/// All three kinds are recovered at the UI boundary as inline messages;
/// none is fatal.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No identity resolves for the viewer; nothing was written.
    #[error("You must be signed in")]
    Unauthenticated,

    /// The input failed validation; nothing was written.
    #[error("{0}")]
    Validation(&'static str),

    /// A repository call failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),
}

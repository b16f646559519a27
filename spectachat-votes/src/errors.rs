//! Error types for the vote tracker.
use thiserror::Error;

use spectachat_repository::RepositoryError;

/// Represents the ways a cast can be refused or fail.
///
/// Both kinds are recovered at the caller: surfaced inline, never fatal.
#[derive(Debug, Error)]
pub enum VoteError {
    /// No identity resolves for the viewer; the cast was refused before any
    /// store operation was issued.
    #[error("You must be signed in to vote")]
    Unauthenticated,

    /// The persistence call failed; no local state was changed.
    #[error("Vote store error: {0}")]
    Store(#[from] RepositoryError),
}

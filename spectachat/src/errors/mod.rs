//! Error types for the service layer.
//! Consolidates errors from the repositories, the vote tracker, and the
//! services into the top-level error the binary reports.
mod service;

pub use service::ServiceError;

/// Represents errors that can occur anywhere in the hub's service layer.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Repository error: {0}")]
    Repository(#[from] spectachat_repository::RepositoryError),
    #[error("Vote error: {0}")]
    Vote(#[from] spectachat_votes::VoteError),
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

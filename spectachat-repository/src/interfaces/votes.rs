//! This module defines the `VoteRepository` trait, which provides an
//! interface for the per-user vote rows behind the vote tracker. It
//! abstracts the row-level operations the tracker selects between.
use spectachat_shared::types::{TargetId, TargetType, VoteKey, VoteRecord, VoteState};

use crate::errors::RepositoryError;

/// A trait that defines the interface for the vote row store.
///
/// At most one row exists per `VoteKey`; a retracted vote is deleted rather
/// than stored as neutral. Implementors provide the insert/update/delete
/// triple the tracker's transition table selects between, plus the lookups
/// used at tracker construction and during tally reconciliation.
#[async_trait::async_trait]
pub trait VoteRepository: Send + Sync {
    /// Finds the vote row for a key, if one exists.
    ///
    /// # Arguments
    ///
    /// * `key` - The (user, target, target type) tuple to look up.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the user has no standing vote on the target.
    async fn find_vote(&self, key: &VoteKey) -> Result<Option<VoteRecord>, RepositoryError>;

    /// Inserts a new vote row.
    ///
    /// The record's state must be non-neutral; the unique key constraint
    /// rejects a second row for the same tuple.
    async fn insert_vote(&self, record: &VoteRecord) -> Result<(), RepositoryError>;

    /// Updates an existing vote row in place to a new non-neutral state.
    async fn update_vote(&self, key: &VoteKey, state: VoteState) -> Result<(), RepositoryError>;

    /// Deletes the vote row for a key. Retraction to neutral.
    async fn delete_vote(&self, key: &VoteKey) -> Result<(), RepositoryError>;

    /// Sums the standing votes for a target across all users.
    ///
    /// Used by tally reconciliation; the tracker itself never calls this.
    async fn sum_votes(
        &self,
        target_id: TargetId,
        target_type: TargetType,
    ) -> Result<i64, RepositoryError>;
}

//! The vote tracker: per-target, per-viewer vote state and tally.
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::warn;

use spectachat_repository::{IdentityProvider, VoteRepository};
use spectachat_shared::types::{TargetId, TargetType, VoteDirection, VoteKey, VoteRecord, VoteState};

use crate::errors::VoteError;
use crate::transition::{PersistAction, VoteTransition};

/// The result of a successful cast, handed back for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    /// The new displayed tally.
    pub tally: i64,
    /// The viewer's vote after the cast, for highlighting the controls.
    pub vote: VoteState,
}

struct TrackerState {
    user_vote: VoteState,
    tally: i64,
}

/// Tracks one viewer's vote on one target and the tally shown next to it.
///
/// An instance is transient: constructed per (target, viewer) view and
/// discarded with it. The tally it carries is a display-layer approximation
/// seeded by the caller; concurrent votes by other users are not folded in
/// until the next full reload. Casts on one instance are serialized behind
/// an internal lock, so a second rapid click waits for the first call to
/// resolve and then computes against the committed state.
pub struct VoteTracker {
    target_id: TargetId,
    target_type: TargetType,
    identity: Arc<dyn IdentityProvider>,
    votes: Arc<dyn VoteRepository>,
    state: Mutex<TrackerState>,
}

impl VoteTracker {
    /// Opens a tracker for a target, seeding the tally from the caller's
    /// last read of the stored aggregate.
    ///
    /// The viewer's existing vote is fetched best-effort: an anonymous
    /// viewer has cast no vote, so the fetch is skipped, and a store
    /// failure here degrades to neutral with a warning rather than
    /// failing construction.
    ///
    /// # Arguments
    ///
    /// * `target_id` - The entity being voted on.
    /// * `target_type` - Whether the target is a question or an answer.
    /// * `initial_tally` - The stored aggregate at the caller's last read.
    /// * `identity` - The seam resolving the active viewer.
    /// * `votes` - The vote row store.
    pub async fn open(
        target_id: TargetId,
        target_type: TargetType,
        initial_tally: i64,
        identity: Arc<dyn IdentityProvider>,
        votes: Arc<dyn VoteRepository>,
    ) -> Self {
        let user_vote = match identity.current_identity().await {
            Ok(Some(viewer)) => {
                let key = VoteKey {
                    user_id: viewer.user_id,
                    target_id,
                    target_type,
                };
                match votes.find_vote(&key).await {
                    Ok(Some(record)) => record.state,
                    Ok(None) => VoteState::Neutral,
                    Err(e) => {
                        warn!(error = %e, %target_id, "failed to fetch existing vote, defaulting to neutral");
                        VoteState::Neutral
                    }
                }
            }
            Ok(None) => VoteState::Neutral,
            Err(e) => {
                warn!(error = %e, %target_id, "failed to resolve viewer, defaulting to neutral");
                VoteState::Neutral
            }
        };

        Self {
            target_id,
            target_type,
            identity,
            votes,
            state: Mutex::new(TrackerState {
                user_vote,
                tally: initial_tally,
            }),
        }
    }

    /// Casts a vote in a direction.
    ///
    /// Refuses with `VoteError::Unauthenticated` before issuing any store
    /// operation when no identity resolves. On a store failure no local
    /// state is committed: the displayed tally and the viewer's vote are
    /// exactly what they were before the call.
    ///
    /// # Arguments
    ///
    /// * `direction` - The control the viewer clicked.
    ///
    /// # Returns
    ///
    /// The new tally and vote state on success, or a `VoteError` carrying
    /// the failure cause.
    pub async fn cast_vote(&self, direction: VoteDirection) -> Result<VoteOutcome, VoteError> {
        // Held across the persistence call: a concurrent cast waits here
        // and then sees the committed state, never a stale one.
        let mut state = self.state.lock().await;

        let viewer = self
            .identity
            .current_identity()
            .await?
            .ok_or(VoteError::Unauthenticated)?;

        let transition = VoteTransition::compute(state.user_vote, direction);
        let key = VoteKey {
            user_id: viewer.user_id,
            target_id: self.target_id,
            target_type: self.target_type,
        };

        match transition.action {
            PersistAction::Insert => {
                self.votes
                    .insert_vote(&VoteRecord {
                        key,
                        state: transition.next,
                        voted_at: Utc::now(),
                    })
                    .await?
            }
            PersistAction::Update => self.votes.update_vote(&key, transition.next).await?,
            PersistAction::Delete => self.votes.delete_vote(&key).await?,
        }

        state.user_vote = transition.next;
        state.tally += transition.delta;

        Ok(VoteOutcome {
            tally: state.tally,
            vote: state.user_vote,
        })
    }

    /// The viewer's current vote, for highlighting the active control.
    pub async fn current_vote(&self) -> VoteState {
        self.state.lock().await.user_vote
    }

    /// The tally as currently displayed.
    pub async fn tally(&self) -> i64 {
        self.state.lock().await.tally
    }
}

//! Pure computation of a vote state transition.
//!
//! One toggle rule covers the three user-facing behaviors: first vote in a
//! direction, retraction by re-clicking the same direction, and one-step
//! reversal to the opposite direction.
use spectachat_shared::types::{VoteDirection, VoteState};

/// The row operation a transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    /// No row exists yet; create one.
    Insert,
    /// A row exists and stays; flip it in place.
    Update,
    /// A row exists and the vote retracts to neutral; remove it.
    Delete,
}

/// Represents the outcome of applying one cast to a current vote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    /// The vote state after the cast.
    pub next: VoteState,
    /// The row operation that persists the cast.
    pub action: PersistAction,
    /// The signed change to the displayed tally, in -2..=2. A reversal
    /// moves the tally by 2 in a single cast.
    pub delta: i64,
}

impl VoteTransition {
    /// Computes the transition for one cast.
    ///
    /// Casting the direction already held retracts to neutral; any other
    /// cast lands on the direction. The action follows from which side of
    /// the transition is neutral, and the delta is the difference of the
    /// two states' tally contributions.
    pub fn compute(current: VoteState, direction: VoteDirection) -> Self {
        let next = if current == direction.as_state() {
            VoteState::Neutral
        } else {
            direction.as_state()
        };

        let action = match (current, next) {
            (VoteState::Neutral, _) => PersistAction::Insert,
            (_, VoteState::Neutral) => PersistAction::Delete,
            _ => PersistAction::Update,
        };

        Self {
            next,
            action,
            delta: next.value() - current.value(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{TargetId, UserId};

/// Disambiguates the id namespace of a votable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// The vote targets a question.
    Question,
    /// The vote targets an answer to a question.
    Answer,
}

impl TargetType {
    /// Returns the storage representation of this target type.
    pub fn as_i16(self) -> i16 {
        match self {
            TargetType::Question => 0,
            TargetType::Answer => 1,
        }
    }

    /// Parses a storage representation back into a `TargetType`.
    ///
    /// Returns `None` for values outside the known range.
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            0 => Some(TargetType::Question),
            1 => Some(TargetType::Answer),
            _ => None,
        }
    }
}

/// Represents the direction of a single vote action.
///
/// This is the only input a voter can produce; retraction is expressed by
/// casting the same direction again, not by a third variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteDirection {
    /// An upvote or positive endorsement.
    Up,
    /// A downvote or negative endorsement.
    Down,
}

impl VoteDirection {
    /// Returns the vote state a cast in this direction lands on.
    pub fn as_state(self) -> VoteState {
        match self {
            VoteDirection::Up => VoteState::Up,
            VoteDirection::Down => VoteState::Down,
        }
    }
}

/// Represents a user's standing vote on a target.
///
/// `Neutral` is never persisted: the absence of a vote row means neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteState {
    Up,
    Neutral,
    Down,
}

impl VoteState {
    /// Returns the signed contribution of this state to a tally.
    pub fn value(self) -> i64 {
        match self {
            VoteState::Up => 1,
            VoteState::Neutral => 0,
            VoteState::Down => -1,
        }
    }

    /// Returns the storage representation of a non-neutral state.
    ///
    /// `Neutral` has no storage representation; it is row absence.
    pub fn as_i16(self) -> Option<i16> {
        match self {
            VoteState::Up => Some(1),
            VoteState::Down => Some(-1),
            VoteState::Neutral => None,
        }
    }

    /// Parses a stored `vote_type` column value.
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(VoteState::Up),
            -1 => Some(VoteState::Down),
            _ => None,
        }
    }
}

/// Identifies a single user's vote on a single target.
///
/// At most one vote row exists per key; the database enforces this with a
/// unique constraint over the three columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VoteKey {
    pub user_id: UserId,
    pub target_id: TargetId,
    pub target_type: TargetType,
}

/// Represents a persisted vote row.
///
/// `state` is always `Up` or `Down` here: a retracted vote is deleted, not
/// stored as neutral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub key: VoteKey,
    pub state: VoteState,
    pub voted_at: DateTime<Utc>,
}

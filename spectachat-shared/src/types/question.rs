use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Category, QuestionId, UserId};

/// Represents a question as stored, including its derived counters.
///
/// `votes` and `answer_count` are externally maintained aggregates; readers
/// treat them as display-layer approximations that a reload corrects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub votes: i64,
    pub answer_count: i64,
}

/// Input for posting a new question. Validated by the catalog service
/// before it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
    pub category: Category,
}

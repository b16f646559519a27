//! This module defines the `AnswerRepository` trait, which provides an
//! interface for answer rows.
use spectachat_shared::types::{Answer, AnswerId, NewAnswer, QuestionId, UserId};

use crate::errors::RepositoryError;

/// A trait that defines the interface for the answer store.
#[async_trait::async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Inserts a new answer authored by `user_id`.
    async fn insert_answer(
        &self,
        user_id: UserId,
        answer: &NewAnswer,
    ) -> Result<Answer, RepositoryError>;

    /// Lists the answers to a question, oldest first.
    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, RepositoryError>;

    /// Lists every answer id. Reconciliation support.
    async fn list_ids(&self) -> Result<Vec<AnswerId>, RepositoryError>;

    /// Overwrites an answer's stored vote counter. Reconciliation support.
    async fn set_vote_count(&self, id: AnswerId, votes: i64) -> Result<(), RepositoryError>;
}

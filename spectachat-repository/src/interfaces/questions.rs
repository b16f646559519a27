//! This module defines the `QuestionRepository` trait, which provides an
//! interface for question rows and their derived counters.
use spectachat_shared::types::{Category, NewQuestion, Question, QuestionId, UserId};

use crate::errors::RepositoryError;

/// A trait that defines the interface for the question store.
///
/// Covers the catalog's browse/search/detail reads, question creation, and
/// the counter updates the answer flow and the tally reconciler perform.
#[async_trait::async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Inserts a new question authored by `user_id`.
    ///
    /// # Returns
    ///
    /// The stored `Question` with fresh id, timestamps, and zeroed counters.
    async fn insert_question(
        &self,
        user_id: UserId,
        question: &NewQuestion,
    ) -> Result<Question, RepositoryError>;

    /// Fetches a single question by id.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// Lists the questions filed under a category, newest first.
    async fn list_by_category(&self, category: Category) -> Result<Vec<Question>, RepositoryError>;

    /// Lists the most recently asked questions, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Question>, RepositoryError>;

    /// Searches questions whose title or content contains `query`,
    /// case-insensitively, newest first.
    ///
    /// The query is a substring match, not a pattern language, but SQL
    /// wildcard characters (`%`, `_`) inside it are interpreted by the
    /// backing `ILIKE`, not escaped; `100%` matches every row.
    async fn search(&self, query: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Increments a question's answer counter by one.
    async fn increment_answer_count(&self, id: QuestionId) -> Result<(), RepositoryError>;

    /// Lists every question id. Reconciliation support.
    async fn list_ids(&self) -> Result<Vec<QuestionId>, RepositoryError>;

    /// Overwrites a question's stored vote counter. Reconciliation support.
    async fn set_vote_count(&self, id: QuestionId, votes: i64) -> Result<(), RepositoryError>;
}

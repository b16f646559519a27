//! PostgreSQL implementation of the answer store.
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use spectachat_shared::types::{Answer, AnswerId, NewAnswer, QuestionId, UserId};

use crate::errors::RepositoryError;
use crate::interfaces::AnswerRepository;

/// PostgreSQL implementation of `AnswerRepository`.
pub struct PostgresAnswerRepository {
    pool: sqlx::PgPool,
}

impl PostgresAnswerRepository {
    /// Creates a new PostgreSQL answer repository.
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, RepositoryError> {
        Ok(Self { pool })
    }

    fn answer_from_row(row: &PgRow) -> Result<Answer, RepositoryError> {
        Ok(Answer {
            id: row.try_get("id")?,
            question_id: row.try_get("question_id")?,
            content: row.try_get("content")?,
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            votes: row.try_get("votes")?,
            is_accepted: row.try_get("is_accepted")?,
        })
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn insert_answer(
        &self,
        user_id: UserId,
        answer: &NewAnswer,
    ) -> Result<Answer, RepositoryError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO answers \
             (id, question_id, content, user_id, created_at, updated_at, votes, is_accepted) \
             VALUES ($1, $2, $3, $4, $5, $5, 0, FALSE)",
        )
        .bind(id)
        .bind(answer.question_id)
        .bind(&answer.content)
        .bind(user_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Answer {
            id,
            question_id: answer.question_id,
            content: answer.content.clone(),
            user_id,
            created_at: now,
            updated_at: now,
            votes: 0,
            is_accepted: false,
        })
    }

    async fn list_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, question_id, content, user_id, created_at, updated_at, votes, is_accepted \
             FROM answers WHERE question_id = $1 ORDER BY created_at ASC",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::answer_from_row).collect()
    }

    async fn list_ids(&self) -> Result<Vec<AnswerId>, RepositoryError> {
        let rows = sqlx::query("SELECT id FROM answers")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get("id").map_err(RepositoryError::from))
            .collect()
    }

    async fn set_vote_count(&self, id: AnswerId, votes: i64) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE answers SET votes = $2 WHERE id = $1")
            .bind(id)
            .bind(votes)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

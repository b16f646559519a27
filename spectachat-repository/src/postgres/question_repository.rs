//! PostgreSQL implementation of the question store.
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use spectachat_shared::types::{Category, NewQuestion, Question, QuestionId, UserId};

use crate::errors::RepositoryError;
use crate::interfaces::QuestionRepository;

/// PostgreSQL implementation of `QuestionRepository`.
pub struct PostgresQuestionRepository {
    pool: sqlx::PgPool,
}

const QUESTION_COLUMNS: &str =
    "id, title, content, category, user_id, created_at, updated_at, votes, answer_count";

impl PostgresQuestionRepository {
    /// Creates a new PostgreSQL question repository.
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, RepositoryError> {
        Ok(Self { pool })
    }

    fn question_from_row(row: &PgRow) -> Result<Question, RepositoryError> {
        let category_raw: String = row.try_get("category")?;
        let category: Category = category_raw
            .parse()
            .map_err(RepositoryError::InvalidCategory)?;

        Ok(Question {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            category,
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            votes: row.try_get("votes")?,
            answer_count: row.try_get("answer_count")?,
        })
    }

    fn questions_from_rows(rows: Vec<PgRow>) -> Result<Vec<Question>, RepositoryError> {
        rows.iter().map(Self::question_from_row).collect()
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn insert_question(
        &self,
        user_id: UserId,
        question: &NewQuestion,
    ) -> Result<Question, RepositoryError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO questions \
             (id, title, content, category, user_id, created_at, updated_at, votes, answer_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $6, 0, 0)",
        )
        .bind(id)
        .bind(&question.title)
        .bind(&question.content)
        .bind(question.category.as_str())
        .bind(user_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id,
            title: question.title.clone(),
            content: question.content.clone(),
            category: question.category,
            user_id,
            created_at: now,
            updated_at: now,
            votes: 0,
            answer_count: 0,
        })
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::question_from_row).transpose()
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE category = $1 ORDER BY created_at DESC"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Self::questions_from_rows(rows)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Self::questions_from_rows(rows)
    }

    async fn search(&self, query: &str) -> Result<Vec<Question>, RepositoryError> {
        let pattern = format!("%{query}%");

        let rows = sqlx::query(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE title ILIKE $1 OR content ILIKE $1 \
             ORDER BY created_at DESC"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Self::questions_from_rows(rows)
    }

    async fn increment_answer_count(&self, id: QuestionId) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE questions SET answer_count = answer_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<QuestionId>, RepositoryError> {
        let rows = sqlx::query("SELECT id FROM questions")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get("id").map_err(RepositoryError::from))
            .collect()
    }

    async fn set_vote_count(&self, id: QuestionId, votes: i64) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE questions SET votes = $2 WHERE id = $1")
            .bind(id)
            .bind(votes)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

//! PostgreSQL implementation of the vote row store.
//!
//! Backs the `votes` table: one row per (user, target, target type), with a
//! unique constraint over the tuple and `vote_type` constrained to ±1.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use spectachat_shared::types::{TargetId, TargetType, VoteKey, VoteRecord, VoteState};

use crate::errors::RepositoryError;
use crate::interfaces::VoteRepository;

/// PostgreSQL implementation of `VoteRepository`.
///
/// Each operation is a single statement against the `votes` table, so no
/// explicit transaction wrapping is needed here; atomicity of a cast is the
/// tracker's concern, and it issues exactly one row operation per cast.
pub struct PostgresVoteRepository {
    pool: sqlx::PgPool,
}

impl PostgresVoteRepository {
    /// Creates a new PostgreSQL vote repository.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the hub schema.
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, RepositoryError> {
        Ok(Self { pool })
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn find_vote(&self, key: &VoteKey) -> Result<Option<VoteRecord>, RepositoryError> {
        let row = sqlx::query(
            "SELECT vote_type, voted_at FROM votes \
             WHERE user_id = $1 AND target_id = $2 AND target_type = $3",
        )
        .bind(key.user_id)
        .bind(key.target_id)
        .bind(key.target_type.as_i16())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: i16 = row.try_get("vote_type")?;
        let state =
            VoteState::from_i16(raw).ok_or(RepositoryError::InvalidVoteType(raw))?;
        let voted_at: DateTime<Utc> = row.try_get("voted_at")?;

        Ok(Some(VoteRecord {
            key: *key,
            state,
            voted_at,
        }))
    }

    async fn insert_vote(&self, record: &VoteRecord) -> Result<(), RepositoryError> {
        let vote_type = record
            .state
            .as_i16()
            .ok_or(RepositoryError::InvalidVoteType(0))?;

        sqlx::query(
            "INSERT INTO votes (user_id, target_id, target_type, vote_type, voted_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.key.user_id)
        .bind(record.key.target_id)
        .bind(record.key.target_type.as_i16())
        .bind(vote_type)
        .bind(record.voted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_vote(&self, key: &VoteKey, state: VoteState) -> Result<(), RepositoryError> {
        let vote_type = state.as_i16().ok_or(RepositoryError::InvalidVoteType(0))?;

        sqlx::query(
            "UPDATE votes SET vote_type = $4, voted_at = NOW() \
             WHERE user_id = $1 AND target_id = $2 AND target_type = $3",
        )
        .bind(key.user_id)
        .bind(key.target_id)
        .bind(key.target_type.as_i16())
        .bind(vote_type)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_vote(&self, key: &VoteKey) -> Result<(), RepositoryError> {
        sqlx::query(
            "DELETE FROM votes \
             WHERE user_id = $1 AND target_id = $2 AND target_type = $3",
        )
        .bind(key.user_id)
        .bind(key.target_id)
        .bind(key.target_type.as_i16())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn sum_votes(
        &self,
        target_id: TargetId,
        target_type: TargetType,
    ) -> Result<i64, RepositoryError> {
        let row = sqlx::query(
            "SELECT COALESCE(SUM(vote_type), 0)::BIGINT AS tally FROM votes \
             WHERE target_id = $1 AND target_type = $2",
        )
        .bind(target_id)
        .bind(target_type.as_i16())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("tally")?)
    }
}

//! PostgreSQL implementation of the identity provider.
//!
//! Resolves the active user from an opaque session token against the
//! `sessions` and `profiles` tables. An expired or unknown token is simply
//! an anonymous viewer, not an error.
use async_trait::async_trait;
use sqlx::Row;

use spectachat_shared::types::Identity;

use crate::errors::RepositoryError;
use crate::interfaces::IdentityProvider;

/// PostgreSQL implementation of `IdentityProvider`.
///
/// Holds the session token of the viewer it was constructed for; an
/// instance with no token always resolves to anonymous without touching
/// the database.
pub struct PostgresIdentityProvider {
    pool: sqlx::PgPool,
    session_token: Option<String>,
}

impl PostgresIdentityProvider {
    /// Creates a new identity provider for a viewer's session.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the hub schema.
    /// * `session_token` - The viewer's session token, or `None` for an
    ///   anonymous viewer.
    pub fn new(pool: sqlx::PgPool, session_token: Option<String>) -> Self {
        Self {
            pool,
            session_token,
        }
    }
}

#[async_trait]
impl IdentityProvider for PostgresIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>, RepositoryError> {
        let Some(token) = &self.session_token else {
            return Ok(None);
        };

        let row = sqlx::query(
            "SELECT p.id, p.email, p.username \
             FROM sessions s JOIN profiles p ON p.id = s.user_id \
             WHERE s.token = $1 AND s.expires_at > NOW()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Identity {
            user_id: row.try_get("id")?,
            email: row.try_get("email")?,
            username: row.try_get("username")?,
        }))
    }
}

use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::auth::models::session::{Session, SessionCreate};

/// Session Repository
/// Stores server-side sessions; only the SHA-256 hash of the token is kept.
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create and store a session
    pub async fn create(&self, data: SessionCreate) -> Result<Session> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (user_id, token_hash, expires_at, revoked, created_at, updated_at)
            VALUES ($1, $2, $3, FALSE, NOW(), NOW())
            RETURNING id, user_id, token_hash, expires_at, revoked, created_at, updated_at
            "#,
        )
        .bind(&data.user_id)
        .bind(&data.token_hash)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create session")?;

        Ok(Session {
            id: row.get("id"),
            user_id: row.get("user_id"),
            token_hash: row.get("token_hash"),
            expires_at: row.get("expires_at"),
            revoked: row.get("revoked"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// Find session by token hash
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, token_hash, expires_at, revoked, created_at, updated_at
            FROM sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find session")?;

        if let Some(row) = row {
            Ok(Some(Session {
                id: row.get("id"),
                user_id: row.get("user_id"),
                token_hash: row.get("token_hash"),
                expires_at: row.get("expires_at"),
                revoked: row.get("revoked"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            }))
        } else {
            Ok(None)
        }
    }

    /// Delete sessions past their expiry
    pub async fn delete_expired(&self) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to delete expired sessions")?;

        Ok(result.rows_affected())
    }

    /// Revoke session (revoked = true)
    pub async fn revoke(&self, token_hash: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET revoked = TRUE, updated_at = NOW()
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .context("Failed to revoke session")?;

        Ok(())
    }
}

use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use uuid::Uuid;
use crate::domains::auth::models::user::User;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Get user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, provider, provider_account_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        Ok(Some(User {
            id: row.get("id"),
            name: row.get("name"),
            provider: row.get("provider"),
            provider_account_id: row.get("provider_account_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    // Upsert user by (provider, provider_account_id).
    // Used on sign-in: the first sign-in creates the user, later ones refresh
    // the display name copied from the external account.
    pub async fn upsert_provider_account(
        &self,
        provider: &str,
        provider_account_id: &str,
        name: Option<&str>,
    ) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, name, provider, provider_account_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (provider, provider_account_id)
            DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
            RETURNING id, name, provider, provider_account_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(provider)
        .bind(provider_account_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to upsert user")?;

        Ok(User {
            id: row.get("id"),
            name: row.get("name"),
            provider: row.get("provider"),
            provider_account_id: row.get("provider_account_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

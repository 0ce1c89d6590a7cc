use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::swap::models::book::Book;

pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Get book by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, title, author, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch book by id")?;

        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        Ok(Some(Book {
            id: row.get("id"),
            owner_id: row.get("owner_id"),
            title: row.get("title"),
            author: row.get("author"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }
}

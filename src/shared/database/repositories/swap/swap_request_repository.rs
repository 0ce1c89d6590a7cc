use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{anyhow, Context, Result};
use uuid::Uuid;
use crate::domains::swap::models::swap_request::{SwapFilter, SwapRequest, SwapRequestDetails};
use crate::shared::database::repositories::auth::UserRepository;
use crate::shared::database::repositories::swap::BookRepository;

/// Swap Request Repository
/// Every operation is a single store round-trip; relation expansion is an
/// explicit fetch-by-id step on top of the base row.
pub struct SwapRequestRepository {
    pool: PgPool,
}

impl SwapRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Find the first request matching (requester, holder, holder book).
    // A miss is a normal result, not an error. Callers use this as the
    // advisory duplicate-proposal check before create().
    pub async fn find_by_users_and_book(
        &self,
        requester_id: &str,
        holder_id: &str,
        holder_book_id: &str,
    ) -> Result<Option<SwapRequest>> {
        let row = sqlx::query(
            r#"
            SELECT id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
            FROM swap_requests
            WHERE requester_id = $1 AND holder_id = $2 AND holder_book_id = $3
            LIMIT 1
            "#,
        )
        .bind(requester_id)
        .bind(holder_id)
        .bind(holder_book_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find swap request by users and book")?;

        Ok(row.map(row_to_swap_request))
    }

    // Insert a new request in the proposed state (requester_book_id unset).
    // No deduplication here; foreign key violations surface as store errors.
    pub async fn create(
        &self,
        requester_id: &str,
        holder_id: &str,
        holder_book_id: &str,
    ) -> Result<SwapRequest> {
        let row = sqlx::query(
            r#"
            INSERT INTO swap_requests (id, requester_id, holder_id, holder_book_id, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(requester_id)
        .bind(holder_id)
        .bind(holder_book_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create swap request")?;

        Ok(row_to_swap_request(row))
    }

    // List requests for a user: SENT matches the requester side, RECEIVED the
    // holder side, ALL is the logical OR of both. A row can never match both
    // sides for the same user id, so the union has no duplicates.
    pub async fn list_by_user(
        &self,
        user_id: &str,
        filter: SwapFilter,
    ) -> Result<Vec<SwapRequestDetails>> {
        let query = match filter {
            SwapFilter::Sent => {
                r#"
                SELECT id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
                FROM swap_requests
                WHERE requester_id = $1
                "#
            }
            SwapFilter::Received => {
                r#"
                SELECT id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
                FROM swap_requests
                WHERE holder_id = $1
                "#
            }
            SwapFilter::All => {
                r#"
                SELECT id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
                FROM swap_requests
                WHERE requester_id = $1 OR holder_id = $1
                "#
            }
        };

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list swap requests by user")?;

        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(self.expand(row_to_swap_request(row)).await?);
        }

        Ok(results)
    }

    // Point lookup by id, with relation expansion. A miss returns None.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<SwapRequestDetails>> {
        let row = sqlx::query(
            r#"
            SELECT id, requester_id, holder_id, holder_book_id, requester_book_id, created_at
            FROM swap_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch swap request by id")?;

        match row {
            Some(row) => Ok(Some(self.expand(row_to_swap_request(row)).await?)),
            None => Ok(None),
        }
    }

    // Attach the counter-offered book to a request (single-field update,
    // last-write-wins). Returns false when no row matched the id.
    pub async fn set_requester_book(
        &self,
        swap_id: &str,
        requester_book_id: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE swap_requests
            SET requester_book_id = $2
            WHERE id = $1
            "#,
        )
        .bind(swap_id)
        .bind(requester_book_id)
        .execute(&self.pool)
        .await
        .context("Failed to update swap request")?;

        Ok(result.rows_affected() > 0)
    }

    // Expand a request with its requester, holder, holder book and optional
    // requester book. An unset requester_book_id is a normal case; a dangling
    // reference is not (the schema forbids it).
    async fn expand(&self, request: SwapRequest) -> Result<SwapRequestDetails> {
        let user_repo = UserRepository::new(self.pool.clone());
        let book_repo = BookRepository::new(self.pool.clone());

        let requester = user_repo
            .find_by_id(&request.requester_id)
            .await?
            .ok_or_else(|| anyhow!("Requester not found for swap request {}", request.id))?;

        let holder = user_repo
            .find_by_id(&request.holder_id)
            .await?
            .ok_or_else(|| anyhow!("Holder not found for swap request {}", request.id))?;

        let holder_book = book_repo
            .find_by_id(&request.holder_book_id)
            .await?
            .ok_or_else(|| anyhow!("Holder book not found for swap request {}", request.id))?;

        let requester_book = match &request.requester_book_id {
            Some(book_id) => Some(
                book_repo
                    .find_by_id(book_id)
                    .await?
                    .ok_or_else(|| {
                        anyhow!("Requester book not found for swap request {}", request.id)
                    })?,
            ),
            None => None,
        };

        Ok(SwapRequestDetails {
            id: request.id,
            requester_id: request.requester_id,
            holder_id: request.holder_id,
            holder_book_id: request.holder_book_id,
            requester_book_id: request.requester_book_id,
            created_at: request.created_at,
            requester,
            holder,
            holder_book,
            requester_book,
        })
    }
}

fn row_to_swap_request(row: PgRow) -> SwapRequest {
    SwapRequest {
        id: row.get("id"),
        requester_id: row.get("requester_id"),
        holder_id: row.get("holder_id"),
        holder_book_id: row.get("holder_book_id"),
        requester_book_id: row.get("requester_book_id"),
        created_at: row.get("created_at"),
    }
}

use crate::domains::swap::models::{SwapFilter, SwapRequest, SwapRequestDetails};
use crate::shared::database::{BookRepository, Database, SwapRequestRepository};
use crate::shared::errors::{map_store_error, SwapError};

/// SwapService: swap request lifecycle over the store.
/// Validates identifiers at the boundary, then delegates each operation to a
/// single repository round-trip.
#[derive(Clone)]
pub struct SwapService {
    db: Database,
}

impl SwapService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Duplicate-proposal lookup: first request matching the exact triple,
    /// or None. Advisory only; create() does not enforce uniqueness.
    pub async fn find_by_users_and_book(
        &self,
        requester_id: &str,
        holder_id: &str,
        holder_book_id: &str,
    ) -> Result<Option<SwapRequest>, SwapError> {
        validate_id("requester_id", requester_id)?;
        validate_id("holder_id", holder_id)?;
        validate_id("holder_book_id", holder_book_id)?;

        let swap_repo = SwapRequestRepository::new(self.db.pool().clone());
        swap_repo
            .find_by_users_and_book(requester_id, holder_id, holder_book_id)
            .await
            .map_err(map_store_error)
    }

    /// Create a request in the proposed state
    pub async fn create_initial_request(
        &self,
        requester_id: &str,
        holder_id: &str,
        holder_book_id: &str,
    ) -> Result<SwapRequest, SwapError> {
        validate_id("requester_id", requester_id)?;
        validate_id("holder_id", holder_id)?;
        validate_id("holder_book_id", holder_book_id)?;

        let swap_repo = SwapRequestRepository::new(self.db.pool().clone());
        swap_repo
            .create(requester_id, holder_id, holder_book_id)
            .await
            .map_err(map_store_error)
    }

    /// Directional listing with relation expansion
    pub async fn list_by_user(
        &self,
        user_id: &str,
        filter: SwapFilter,
    ) -> Result<Vec<SwapRequestDetails>, SwapError> {
        validate_id("user_id", user_id)?;

        let swap_repo = SwapRequestRepository::new(self.db.pool().clone());
        swap_repo
            .list_by_user(user_id, filter)
            .await
            .map_err(map_store_error)
    }

    /// Point lookup with relation expansion; a miss is None, not an error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<SwapRequestDetails>, SwapError> {
        validate_id("id", id)?;

        let swap_repo = SwapRequestRepository::new(self.db.pool().clone());
        swap_repo.find_by_id(id).await.map_err(map_store_error)
    }

    /// Confirm a request by attaching the requester's counter-book.
    /// The book must exist: a missing book aborts the confirmation with
    /// BookNotFound instead of silently clearing the field. Re-confirming an
    /// already-confirmed request overwrites (last-write-wins).
    pub async fn confirm(
        &self,
        swap_id: &str,
        requester_book_id: &str,
    ) -> Result<(), SwapError> {
        validate_id("swap_id", swap_id)?;
        validate_id("requester_book_id", requester_book_id)?;

        let book_repo = BookRepository::new(self.db.pool().clone());
        let book = book_repo
            .find_by_id(requester_book_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| SwapError::BookNotFound {
                id: requester_book_id.to_string(),
            })?;

        let swap_repo = SwapRequestRepository::new(self.db.pool().clone());
        let updated = swap_repo
            .set_requester_book(swap_id, &book.id)
            .await
            .map_err(map_store_error)?;

        if !updated {
            return Err(SwapError::SwapRequestNotFound {
                id: swap_id.to_string(),
            });
        }

        Ok(())
    }
}

// Reject empty (or whitespace-only) identifiers before any store access
fn validate_id(field: &'static str, value: &str) -> Result<(), SwapError> {
    if value.trim().is_empty() {
        return Err(SwapError::Validation {
            field,
            message: "must be a non-empty identifier".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id_accepts_plain_identifiers() {
        assert!(validate_id("requester_id", "u1").is_ok());
        assert!(validate_id("id", "4a9a2c0e-21a5-4b74-a7da-07a8b1a2c3d4").is_ok());
    }

    #[test]
    fn test_validate_id_rejects_empty_and_whitespace() {
        let err = validate_id("requester_id", "").unwrap_err();
        assert!(matches!(err, SwapError::Validation { field: "requester_id", .. }));

        let err = validate_id("holder_id", "   ").unwrap_err();
        assert!(matches!(err, SwapError::Validation { field: "holder_id", .. }));
    }
}

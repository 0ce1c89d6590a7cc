use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// Swap request errors
#[derive(Error, Debug)]
pub enum SwapError {
    /// Input rejected before any store access
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Swap request not found
    #[error("Swap request not found: id={id}")]
    SwapRequestNotFound { id: String },

    /// Book not found
    #[error("Book not found: id={id}")]
    BookNotFound { id: String },

    /// Store rejected a write referencing a nonexistent record
    #[error("Referenced record does not exist: {0}")]
    ReferentialIntegrity(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Convert SwapError into an HTTP response
impl From<SwapError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: SwapError) -> Self {
        let (status, message) = match &err {
            SwapError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            SwapError::SwapRequestNotFound { .. } | SwapError::BookNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            SwapError::ReferentialIntegrity(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            SwapError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(json!({ "error": message })))
    }
}

// PostgreSQL foreign key violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Map a repository error onto the swap error taxonomy. Foreign key
/// violations become ReferentialIntegrity; everything else propagates as a
/// database error.
pub fn map_store_error(err: anyhow::Error) -> SwapError {
    for cause in err.chain() {
        if let Some(sqlx::Error::Database(db_err)) = cause.downcast_ref::<sqlx::Error>() {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return SwapError::ReferentialIntegrity(db_err.message().to_string());
            }
        }
    }

    SwapError::DatabaseError(format!("{err:#}"))
}

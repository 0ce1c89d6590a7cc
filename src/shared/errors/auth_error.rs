use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Token not provided
    #[error("Token not provided")]
    MissingToken,

    /// Unknown or revoked session token
    #[error("Invalid session token")]
    InvalidToken,

    /// Session past its expiry
    #[error("Session expired")]
    SessionExpired,

    /// Identity provider rejected the supplied credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Identity provider unreachable or returned an unexpected response
    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: String },

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AuthError into an HTTP response
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let (status, message) = match &err {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::SessionExpired
            | AuthError::AuthenticationFailed(_) => (StatusCode::UNAUTHORIZED, err.to_string()),
            AuthError::IdentityProvider(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AuthError::UserNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
            AuthError::DatabaseError(_) | AuthError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AuthError) -> StatusCode {
        let (status, _): (StatusCode, Json<serde_json::Value>) = err.into();
        status
    }

    #[test]
    fn test_session_errors_map_to_unauthorized() {
        assert_eq!(status_of(AuthError::MissingToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::InvalidToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::SessionExpired), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_provider_errors_map_to_bad_gateway() {
        assert_eq!(
            status_of(AuthError::IdentityProvider("timeout".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }
}

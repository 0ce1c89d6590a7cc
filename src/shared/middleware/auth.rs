use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

/// Authenticated caller (resolved from the session token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub name: Option<String>,
}

/// Extract the bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// AuthenticatedUser as an Axum extractor.
/// Protected handlers take it as an argument; requests without a resolvable
/// session are rejected before the handler body runs.
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        fn reject(err: AuthError) -> (StatusCode, axum::Json<serde_json::Value>) {
            err.into()
        }

        // 1. Extract the "Bearer <token>" value from the Authorization header
        let token =
            bearer_token(&parts.headers).ok_or_else(|| reject(AuthError::MissingToken))?;

        // 2. Resolve the session (delegated to the session service)
        let session = state
            .auth_state
            .session_service
            .resolve_session(token)
            .await
            .map_err(reject)?;

        Ok(AuthenticatedUser {
            user_id: session.user.id,
            name: session.user.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_parses_well_formed_header() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_rejects_missing_or_malformed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}

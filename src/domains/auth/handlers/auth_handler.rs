use crate::domains::auth::models::{LogoutResponse, SigninRequest, SigninResponse, UserResponse};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::{bearer_token, AuthenticatedUser};
use crate::shared::services::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};

/// Sign-in handler: exchange a provider access token for a session
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = SigninResponse),
        (status = 401, description = "Access token rejected by provider"),
        (status = 502, description = "Identity provider unavailable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signin(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (user, session_token) = app_state
        .auth_state
        .auth_service
        .signin(&request.access_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(SigninResponse {
        user: user.into(),
        session_token,
        message: "Signed in successfully".to_string(),
    }))
}

/// Logout handler: revoke the bearer session token of the caller
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session revoked", body = LogoutResponse),
        (status = 401, description = "Missing or invalid session token"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, (StatusCode, Json<serde_json::Value>)> {
    // The extractor already resolved this token; revoke that same session
    let token = bearer_token(&headers)
        .ok_or_else(|| -> (StatusCode, Json<serde_json::Value>) { AuthError::MissingToken.into() })?;

    app_state
        .auth_state
        .auth_service
        .logout(token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(LogoutResponse {
        message: "Session revoked".to_string(),
    }))
}

/// Current-user handler: echo the resolved session identity
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Resolved session user", body = UserResponse),
        (status = 401, description = "Missing or invalid session token")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn get_me(authenticated_user: AuthenticatedUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: authenticated_user.user_id,
        name: authenticated_user.name,
    })
}

// Auth domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::auth::handlers::auth_handler;
use crate::shared::services::AppState;

/// Create authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signin", post(auth_handler::signin))
        .route("/logout", post(auth_handler::logout))
        .route("/me", get(auth_handler::get_me))
}

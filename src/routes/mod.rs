// Routes module: combines all domain routers

use axum::{routing::post, Router};
use crate::domains::auth::routes::create_auth_router;
use crate::domains::swap::handlers::swap_handler;
use crate::domains::swap::routes::create_swap_router;
use crate::shared::services::AppState;

/// Create main router (combines all domain routers)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/hello", post(swap_handler::hello))
        .nest("/api/auth", create_auth_router())
        .nest("/api/swaps", create_swap_router())
}

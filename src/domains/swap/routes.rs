// Swap domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::swap::handlers::swap_handler;
use crate::shared::services::AppState;

/// Create swap request router
pub fn create_swap_router() -> Router<AppState> {
    Router::new()
        .route("/", post(swap_handler::create_initial_swap_request))
        .route("/lookup", get(swap_handler::find_by_users_and_book))
        .route("/user/:user_id", get(swap_handler::find_by_user_id))
        .route("/:id", get(swap_handler::find_by_id))
        .route("/:id/confirm", post(swap_handler::confirm_swap_request))
}

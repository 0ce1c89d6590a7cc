use crate::domains::swap::models::{
    ConfirmSwapRequestData, HelloRequest, HelloResponse, InitialSwapRequestData, SwapListQuery,
    SwapRequest, SwapRequestDetails,
};
use crate::shared::errors::SwapError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// Echo handler (public, no session required)
#[utoipa::path(
    post,
    path = "/api/hello",
    request_body = HelloRequest,
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    ),
    tag = "Swaps"
)]
pub async fn hello(Json(request): Json<HelloRequest>) -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: format!("Hello {}", request.text),
    })
}

/// Duplicate-proposal lookup: first request matching the triple, or null
#[utoipa::path(
    get,
    path = "/api/swaps/lookup",
    params(InitialSwapRequestData),
    responses(
        (status = 200, description = "Matching swap request, or null", body = Option<SwapRequest>),
        (status = 401, description = "Missing or invalid session token"),
        (status = 422, description = "Empty identifier"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Swaps"
)]
pub async fn find_by_users_and_book(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<InitialSwapRequestData>,
) -> Result<Json<Option<SwapRequest>>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .swap_state
        .swap_service
        .find_by_users_and_book(&query.requester_id, &query.holder_id, &query.holder_book_id)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// Create a swap request in the proposed state
#[utoipa::path(
    post,
    path = "/api/swaps",
    request_body = InitialSwapRequestData,
    responses(
        (status = 201, description = "Swap request created", body = SwapRequest),
        (status = 400, description = "Referenced user or book does not exist"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 422, description = "Empty identifier"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Swaps"
)]
pub async fn create_initial_swap_request(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Json(request): Json<InitialSwapRequestData>,
) -> Result<(StatusCode, Json<SwapRequest>), (StatusCode, Json<serde_json::Value>)> {
    let created = app_state
        .swap_state
        .swap_service
        .create_initial_request(
            &request.requester_id,
            &request.holder_id,
            &request.holder_book_id,
        )
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List a user's swap requests by direction, with expanded relations
#[utoipa::path(
    get,
    path = "/api/swaps/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id"),
        SwapListQuery
    ),
    responses(
        (status = 200, description = "Swap requests with expanded relations", body = Vec<SwapRequestDetails>),
        (status = 401, description = "Missing or invalid session token"),
        (status = 422, description = "Empty identifier"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Swaps"
)]
pub async fn find_by_user_id(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(user_id): Path<String>,
    Query(query): Query<SwapListQuery>,
) -> Result<Json<Vec<SwapRequestDetails>>, (StatusCode, Json<serde_json::Value>)> {
    let results = app_state
        .swap_state
        .swap_service
        .list_by_user(&user_id, query.filter)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(results))
}

/// Point lookup by id with expanded relations; a miss is null, not an error
#[utoipa::path(
    get,
    path = "/api/swaps/{id}",
    params(("id" = String, Path, description = "Swap request id")),
    responses(
        (status = 200, description = "Swap request with expanded relations, or null", body = Option<SwapRequestDetails>),
        (status = 401, description = "Missing or invalid session token"),
        (status = 422, description = "Empty identifier"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Swaps"
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<Option<SwapRequestDetails>>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .swap_state
        .swap_service
        .find_by_id(&id)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// Confirm a swap request with the requester's counter-book.
/// Fails with 404 when the book or the request does not exist.
#[utoipa::path(
    post,
    path = "/api/swaps/{id}/confirm",
    params(("id" = String, Path, description = "Swap request id")),
    request_body = ConfirmSwapRequestData,
    responses(
        (status = 204, description = "Swap request confirmed"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Swap request or book not found"),
        (status = 422, description = "Empty identifier"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Swaps"
)]
pub async fn confirm_swap_request(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<ConfirmSwapRequestData>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .swap_state
        .swap_service
        .confirm(&id, &request.requester_book_id)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

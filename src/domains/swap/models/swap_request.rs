use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::user::User;
use crate::domains::swap::models::book::Book;

/// Swap request row.
/// Proposed while `requester_book_id` is unset; confirmed once the holder's
/// counter-book is attached. No other lifecycle states exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwapRequest {
    pub id: String,
    pub requester_id: String,
    pub holder_id: String,
    pub holder_book_id: String,
    pub requester_book_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Swap request expanded with its related entities.
/// `requester_book` is absent for requests still in the proposed state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwapRequestDetails {
    pub id: String,
    pub requester_id: String,
    pub holder_id: String,
    pub holder_book_id: String,
    pub requester_book_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub requester: User,
    pub holder: User,
    pub holder_book: Book,
    pub requester_book: Option<Book>,
}

/// Directional listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapFilter {
    All,
    Sent,
    Received,
}

/// Input for create and duplicate lookup
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct InitialSwapRequestData {
    pub requester_id: String,
    pub holder_id: String,
    pub holder_book_id: String,
}

/// Query parameters for the directional listing
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SwapListQuery {
    pub filter: SwapFilter,
}

/// Input for confirming a request with a counter-book
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmSwapRequestData {
    pub requester_book_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HelloRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub greeting: String,
}

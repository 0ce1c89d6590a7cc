use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session row as stored (token kept only as a hash)
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a session
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub user_id: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// The caller identity attached to a resolved session: the stable user id
/// plus the display name copied from the underlying account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub name: Option<String>,
}

/// A successfully resolved session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedSession {
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

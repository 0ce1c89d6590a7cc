use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::user::User;

/// Sign-in request: an OAuth access token obtained from the provider
#[derive(Debug, Deserialize, ToSchema)]
pub struct SigninRequest {
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SigninResponse {
    pub user: UserResponse,
    pub session_token: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

/// Public view of a user
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

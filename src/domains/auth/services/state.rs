// Auth domain state
use std::sync::Arc;
use crate::domains::auth::services::{AuthService, IdentityProvider, SessionService};
use crate::shared::database::Database;

/// Auth domain state
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub session_service: SessionService,
}

impl AuthState {
    /// Create AuthState with the injected database and identity provider
    pub fn new(db: Database, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        let session_service = SessionService::new(db.clone());
        Self {
            auth_service: AuthService::new(db, identity_provider, session_service.clone()),
            session_service,
        }
    }
}

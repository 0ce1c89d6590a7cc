use std::sync::Arc;
use crate::domains::auth::models::user::User;
use crate::domains::auth::services::{IdentityProvider, SessionService};
use crate::shared::database::{Database, UserRepository};
use crate::shared::errors::AuthError;

/// AuthService: handles the sign-in / sign-out flow
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    identity_provider: Arc<dyn IdentityProvider>,
    session_service: SessionService,
}

impl AuthService {
    pub fn new(
        db: Database,
        identity_provider: Arc<dyn IdentityProvider>,
        session_service: SessionService,
    ) -> Self {
        Self {
            db,
            identity_provider,
            session_service,
        }
    }

    /// Sign in with provider credentials.
    /// Verifies the access token with the identity provider, upserts the
    /// user by (provider, account id), and opens a session.
    /// Returns: (User, session token)
    pub async fn signin(&self, access_token: &str) -> Result<(User, String), AuthError> {
        // 1. Verify the credentials with the external provider
        let account = self.identity_provider.verify(access_token).await?;

        // 2. Upsert the user record
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .upsert_provider_account(
                self.identity_provider.name(),
                &account.account_id,
                account.display_name.as_deref(),
            )
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to upsert user: {}", e)))?;

        // 3. Open a session
        let session_token = self.session_service.create_session(&user.id).await?;

        Ok((user, session_token))
    }

    /// Sign out: revoke the presented session token
    pub async fn logout(&self, session_token: &str) -> Result<(), AuthError> {
        self.session_service.revoke_session(session_token).await
    }
}

use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use crate::domains::auth::models::session::{ResolvedSession, SessionCreate, SessionUser};
use crate::shared::database::{Database, SessionRepository, UserRepository};
use crate::shared::errors::AuthError;

// Session lifetime (7 days)
const SESSION_TTL_DAYS: i64 = 7;

/// Session Service
/// Issues opaque session tokens (stored hashed) and resolves a presented
/// token back to the caller's identity.
#[derive(Clone)]
pub struct SessionService {
    db: Database,
}

impl SessionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Generate an opaque session token (64 random alphanumeric chars)
    pub fn generate_session_token(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    /// Hash a session token for storage
    pub fn hash_session_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Create a session for a user and return the raw token.
    /// Expired rows are swept here so the sessions table does not accumulate
    /// dead entries.
    pub async fn create_session(&self, user_id: &str) -> Result<String, AuthError> {
        let session_repo = SessionRepository::new(self.db.pool().clone());

        session_repo
            .delete_expired()
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to prune sessions: {}", e)))?;

        let token = self.generate_session_token();
        let token_hash = self.hash_session_token(&token);
        let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

        session_repo
            .create(SessionCreate {
                user_id: user_id.to_string(),
                token_hash,
                expires_at,
            })
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create session: {}", e)))?;

        Ok(token)
    }

    /// Resolve a session token to the caller's identity.
    /// The returned user object carries the stable user id and the display
    /// name copied from the underlying account.
    pub async fn resolve_session(&self, token: &str) -> Result<ResolvedSession, AuthError> {
        let session_repo = SessionRepository::new(self.db.pool().clone());

        let token_hash = self.hash_session_token(token);
        let session = session_repo
            .find_by_token_hash(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to look up session: {}", e)))?
            .ok_or(AuthError::InvalidToken)?;

        if session.revoked {
            return Err(AuthError::InvalidToken);
        }
        if session.expires_at <= Utc::now() {
            return Err(AuthError::SessionExpired);
        }

        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .find_by_id(&session.user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch session user: {}", e)))?
            .ok_or(AuthError::UserNotFound {
                id: session.user_id.clone(),
            })?;

        Ok(ResolvedSession {
            user: SessionUser {
                id: user.id,
                name: user.name,
            },
            expires_at: session.expires_at,
        })
    }

    /// Revoke a session by its raw token
    pub async fn revoke_session(&self, token: &str) -> Result<(), AuthError> {
        let session_repo = SessionRepository::new(self.db.pool().clone());

        let token_hash = self.hash_session_token(token);
        session_repo
            .revoke(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to revoke session: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        // Pool is never touched by the token helpers
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/unused")
            .expect("lazy pool");
        SessionService::new(Database::from_pool(pool))
    }

    #[tokio::test]
    async fn test_generated_tokens_are_unique_and_64_chars() {
        let service = service();
        let a = service.generate_session_token();
        let b = service.generate_session_token();
        assert_eq!(a.len(), 64);
        assert_eq!(b.len(), 64);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_token_hash_is_stable_and_differs_from_token() {
        let service = service();
        let token = "some-session-token";
        let hash = service.hash_session_token(token);
        assert_eq!(hash, service.hash_session_token(token));
        assert_ne!(hash, token);
        assert_eq!(hash.len(), 64); // sha256 hex
    }
}

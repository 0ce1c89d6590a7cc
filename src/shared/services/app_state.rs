use std::sync::Arc;
use crate::domains::auth::services::{AuthState, IdentityProvider};
use crate::domains::swap::services::SwapState;
use crate::shared::database::Database;

/// Application state (combines all domain states)
/// Built once at the composition root; the database handle and identity
/// provider are injected here, never held as globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth_state: AuthState,
    pub swap_state: SwapState,
}

impl AppState {
    pub fn new(db: Database, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        let auth_state = AuthState::new(db.clone(), identity_provider);
        let swap_state = SwapState::new(db.clone());

        Self {
            db,
            auth_state,
            swap_state,
        }
    }
}

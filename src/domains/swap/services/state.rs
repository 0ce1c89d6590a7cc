// Swap domain state
use crate::domains::swap::services::SwapService;
use crate::shared::database::Database;

/// Swap domain state
#[derive(Clone)]
pub struct SwapState {
    pub swap_service: SwapService,
}

impl SwapState {
    pub fn new(db: Database) -> Self {
        Self {
            swap_service: SwapService::new(db),
        }
    }
}

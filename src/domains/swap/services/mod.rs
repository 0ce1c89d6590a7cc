// Swap domain services
pub mod state;
pub mod swap_service;

pub use state::*;
pub use swap_service::*;

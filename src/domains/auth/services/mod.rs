// Auth domain services
pub mod auth_service;
pub mod identity_provider;
pub mod session_service;
pub mod state;

pub use auth_service::*;
pub use identity_provider::*;
pub use session_service::*;
pub use state::*;

// Shared errors
pub mod auth_error;
pub mod swap_error;

pub use auth_error::*;
pub use swap_error::*;

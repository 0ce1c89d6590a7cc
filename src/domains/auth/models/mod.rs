// Auth domain models
pub mod auth;
pub mod session;
pub mod user;

pub use auth::*;
pub use session::*;
pub use user::*;

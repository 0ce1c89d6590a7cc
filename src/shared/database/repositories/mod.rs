// All repositories module
pub mod auth;
pub mod swap;

// Re-export all repositories for convenience
pub use auth::*;
pub use swap::*;

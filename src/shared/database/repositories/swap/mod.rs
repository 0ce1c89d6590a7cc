// Swap repositories
pub mod book_repository;
pub mod swap_request_repository;

pub use book_repository::*;
pub use swap_request_repository::*;

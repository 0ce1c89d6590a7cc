// Swap domain models
pub mod book;
pub mod swap_request;

pub use book::*;
pub use swap_request::*;

// Swap domain handlers
pub mod swap_handler;

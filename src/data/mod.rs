pub mod cache_status;
pub mod game;

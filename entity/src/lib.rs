pub mod game;
pub mod game_cache_status;
pub mod prelude;

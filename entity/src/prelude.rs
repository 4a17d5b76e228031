pub use super::game::Entity as Game;
pub use super::game_cache_status::Entity as GameCacheStatus;

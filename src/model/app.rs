use sea_orm::DatabaseConnection;

use crate::config::CacheConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub steam_client: steam::Client,
    pub cache: CacheConfig,
}

// Allows test-utils to convert its context into an AppState without a
// circular dependency on this crate.
impl From<(DatabaseConnection, steam::Client)> for AppState {
    fn from((db, steam_client): (DatabaseConnection, steam::Client)) -> Self {
        Self {
            db,
            steam_client,
            cache: CacheConfig::default(),
        }
    }
}

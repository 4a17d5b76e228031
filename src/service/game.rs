use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    config::CacheConfig,
    data::{cache_status::CacheStatusRepository, game::GameRepository},
    error::Error,
};

/// Widely played titles preloaded so the catalog is never empty on a
/// fresh deployment.
pub const POPULAR_STEAM_IDS: [i64; 15] = [
    1091500, // Cyberpunk 2077
    1245620, // Elden Ring
    1270790, // It Takes Two
    1593500, // God of War
    1174180, // Red Dead Redemption 2
    570,     // Dota 2
    730,     // Counter-Strike 2
    252490,  // Rust
    578080,  // PUBG: Battlegrounds
    271590,  // Grand Theft Auto V
    440,     // Team Fortress 2
    8930,    // Sid Meier's Civilization V
    105600,  // Terraria
    220,     // Half-Life 2
    4000,    // Garry's Mod
];

/// Aggregate counts over the `game` table.
#[derive(Debug)]
pub struct GameTableStats {
    pub total_games: u64,
    pub fresh_games: u64,
    pub expired_games: u64,
    pub avg_age_hours: Option<f64>,
}

/// Aggregate counters over the `game_cache_status` table.
#[derive(Debug)]
pub struct FetchStats {
    pub total_entries: u64,
    pub total_fetches: i64,
    pub total_errors: i64,
    pub avg_fetches_per_game: Option<f64>,
}

#[derive(Debug)]
pub struct CacheStatsSummary {
    pub games: GameTableStats,
    pub cache: FetchStats,
}

pub struct GameCacheService<'a> {
    db: &'a DatabaseConnection,
    steam_client: &'a steam::Client,
    config: CacheConfig,
}

impl<'a> GameCacheService<'a> {
    /// Creates a new instance of [`GameCacheService`]
    pub fn new(
        db: &'a DatabaseConnection,
        steam_client: &'a steam::Client,
        config: CacheConfig,
    ) -> Self {
        Self {
            db,
            steam_client,
            config,
        }
    }

    /// Serve a game from the local cache, fetching from the Steam store
    /// when the row is missing or older than the freshness window.
    ///
    /// Every store round trip is recorded in `game_cache_status`, failed
    /// ones with the error message. A store failure for a game that is
    /// merely stale still fails the call; the stale row is not served.
    pub async fn fetch_and_cache_game(
        &self,
        steam_id: i64,
    ) -> Result<entity::game::Model, Error> {
        let game_repo = GameRepository::new(self.db);

        if let Some(game) = game_repo.get_by_steam_id(steam_id).await? {
            let age = Utc::now().naive_utc() - game.last_updated;

            if age < self.config.freshness {
                tracing::debug!(steam_id, "serving game from cache");

                return Ok(game);
            }

            tracing::info!(steam_id, "cached game expired, refetching");
        }

        self.refresh_game(steam_id).await
    }

    /// Fetch a game from the Steam store and upsert it, bypassing the
    /// freshness check.
    async fn refresh_game(&self, steam_id: i64) -> Result<entity::game::Model, Error> {
        let game_repo = GameRepository::new(self.db);
        let status_repo = CacheStatusRepository::new(self.db);

        let details = match self.steam_client.app_details(steam_id).await {
            Ok(details) => details,
            Err(error) => {
                status_repo
                    .record_attempt(steam_id, Some(&error.to_string()))
                    .await?;

                return Err(error.into());
            }
        };

        let game = game_repo.upsert(steam_id, details).await?;
        status_repo.record_attempt(steam_id, None).await?;

        tracing::info!(steam_id, name = %game.name, "cached game from Steam store");

        Ok(game)
    }

    /// Fetch a list of games sequentially, pausing between store calls.
    ///
    /// Steam store failures are logged and skipped so one bad id cannot
    /// poison the batch; database errors abort it.
    pub async fn batch_fetch_games(
        &self,
        steam_ids: &[i64],
    ) -> Result<Vec<entity::game::Model>, Error> {
        let mut games = Vec::with_capacity(steam_ids.len());

        for (position, &steam_id) in steam_ids.iter().enumerate() {
            if position > 0 {
                tokio::time::sleep(self.config.batch_delay).await;
            }

            match self.fetch_and_cache_game(steam_id).await {
                Ok(game) => games.push(game),
                Err(Error::SteamError(error)) => {
                    tracing::warn!(steam_id, %error, "skipping game in batch fetch");
                }
                Err(error) => return Err(error),
            }
        }

        Ok(games)
    }

    /// Refetch every cached game whose entry has outlived the freshness
    /// window. Returns how many games were refreshed.
    pub async fn refresh_expired_cache(&self) -> Result<usize, Error> {
        let game_repo = GameRepository::new(self.db);

        let cutoff = Utc::now().naive_utc() - self.config.freshness;
        let expired = game_repo.get_expired(cutoff).await?;

        if expired.is_empty() {
            tracing::debug!("no expired cache entries to refresh");

            return Ok(0);
        }

        tracing::info!(count = expired.len(), "refreshing expired cache entries");

        let steam_ids: Vec<i64> = expired.iter().filter_map(|game| game.steam_id).collect();
        let refreshed = self.batch_fetch_games(&steam_ids).await?;

        Ok(refreshed.len())
    }

    /// Preload the catalog with a curated list of popular games.
    pub async fn fetch_popular_games(&self) -> Result<Vec<entity::game::Model>, Error> {
        self.batch_fetch_games(&POPULAR_STEAM_IDS).await
    }

    /// Aggregate cache health numbers over both catalog tables.
    pub async fn get_cache_stats(&self) -> Result<CacheStatsSummary, Error> {
        let game_repo = GameRepository::new(self.db);
        let status_repo = CacheStatusRepository::new(self.db);

        let now = Utc::now().naive_utc();
        let timestamps = game_repo.last_updated_timestamps().await?;

        let total_games = timestamps.len() as u64;
        let fresh_games = timestamps
            .iter()
            .filter(|&&updated| now - updated < self.config.freshness)
            .count() as u64;

        let avg_age_hours = if timestamps.is_empty() {
            None
        } else {
            let total_hours: f64 = timestamps
                .iter()
                .map(|&updated| (now - updated).num_seconds() as f64 / 3600.0)
                .sum();

            Some(total_hours / timestamps.len() as f64)
        };

        let counters = status_repo.counters().await?;

        let total_entries = counters.len() as u64;
        let total_fetches: i64 = counters.iter().map(|&(fetches, _)| fetches as i64).sum();
        let total_errors: i64 = counters.iter().map(|&(_, errors)| errors as i64).sum();

        let avg_fetches_per_game = if counters.is_empty() {
            None
        } else {
            Some(total_fetches as f64 / counters.len() as f64)
        };

        Ok(CacheStatsSummary {
            games: GameTableStats {
                total_games,
                fresh_games,
                expired_games: total_games - fresh_games,
                avg_age_hours,
            },
            cache: FetchStats {
                total_entries,
                total_fetches,
                total_errors,
                avg_fetches_per_game,
            },
        })
    }
}

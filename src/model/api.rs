//! API data transfer objects.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::service::game::{CacheStatsSummary, FetchStats, GameTableStats};

/// Generic error payload returned by failing endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// One locally cached game as served by the catalog endpoints.
///
/// List and object fields are the opaque JSON blobs the Steam store
/// delivered; the API passes them through untouched.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub steam_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub header_image: Option<String>,
    pub background_image: Option<String>,
    pub screenshots: Option<Value>,
    pub movies: Option<Value>,
    pub categories: Option<Value>,
    pub genres: Option<Value>,
    pub release_date: Option<String>,
    pub coming_soon: bool,
    pub platforms: Option<Value>,
    pub metacritic_score: Option<i32>,
    pub metacritic_url: Option<String>,
    pub price_currency: Option<String>,
    pub price_initial: Option<i32>,
    pub price_final: Option<i32>,
    pub price_discount: Option<i32>,
    pub price_initial_formatted: Option<String>,
    pub price_final_formatted: Option<String>,
    pub dlc: Option<Value>,
    pub requirements_minimum: Option<String>,
    pub requirements_recommended: Option<String>,
    pub supported_languages: Option<String>,
    pub website: Option<String>,
    pub developers: Option<Value>,
    pub publishers: Option<Value>,
    pub is_free: bool,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub recommendations_total: i32,
    pub achievements_count: i32,
    pub steam_store_url: Option<String>,
    pub last_updated: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<entity::game::Model> for GameDto {
    fn from(game: entity::game::Model) -> Self {
        Self {
            id: game.id,
            steam_id: game.steam_id,
            name: game.name,
            description: game.description,
            short_description: game.short_description,
            header_image: game.header_image,
            background_image: game.background_image,
            screenshots: game.screenshots,
            movies: game.movies,
            categories: game.categories,
            genres: game.genres,
            release_date: game.release_date,
            coming_soon: game.coming_soon,
            platforms: game.platforms,
            metacritic_score: game.metacritic_score,
            metacritic_url: game.metacritic_url,
            price_currency: game.price_currency,
            price_initial: game.price_initial,
            price_final: game.price_final,
            price_discount: game.price_discount,
            price_initial_formatted: game.price_initial_formatted,
            price_final_formatted: game.price_final_formatted,
            dlc: game.dlc,
            requirements_minimum: game.requirements_minimum,
            requirements_recommended: game.requirements_recommended,
            supported_languages: game.supported_languages,
            website: game.website,
            developers: game.developers,
            publishers: game.publishers,
            is_free: game.is_free,
            game_type: game.game_type,
            recommendations_total: game.recommendations_total,
            achievements_count: game.achievements_count,
            steam_store_url: game.steam_store_url,
            last_updated: game.last_updated,
            created_at: game.created_at,
        }
    }
}

/// Aggregate counts over the `game` table.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GameTableStatsDto {
    pub total_games: u64,
    pub fresh_games: u64,
    pub expired_games: u64,
    pub avg_age_hours: Option<f64>,
}

/// Aggregate counters over the `game_cache_status` table.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FetchStatsDto {
    pub total_entries: u64,
    pub total_fetches: i64,
    pub total_errors: i64,
    pub avg_fetches_per_game: Option<f64>,
}

/// Cache health summary returned by the cache status endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheStatsDto {
    pub games: GameTableStatsDto,
    pub cache: FetchStatsDto,
}

impl From<CacheStatsSummary> for CacheStatsDto {
    fn from(stats: CacheStatsSummary) -> Self {
        let CacheStatsSummary { games, cache } = stats;
        let GameTableStats {
            total_games,
            fresh_games,
            expired_games,
            avg_age_hours,
        } = games;
        let FetchStats {
            total_entries,
            total_fetches,
            total_errors,
            avg_fetches_per_game,
        } = cache;

        Self {
            games: GameTableStatsDto {
                total_games,
                fresh_games,
                expired_games,
                avg_age_hours,
            },
            cache: FetchStatsDto {
                total_entries,
                total_fetches,
                total_errors,
                avg_fetches_per_game,
            },
        }
    }
}

/// Response for the batch refresh trigger endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshDto {
    pub message: String,
    pub refreshed_count: usize,
}

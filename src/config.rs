use chrono::Duration;

use crate::error::config::ConfigError;

/// Default freshness window before a cached game is refetched from Steam.
const DEFAULT_FRESHNESS_HOURS: i64 = 24;

/// Default delay between successive Steam calls in a batch fetch.
const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

/// Application configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    pub steam_api_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub cache: CacheConfig,
}

/// Tunables for the game cache, injected into [`GameCacheService`] so tests
/// can override them without waiting real-world durations.
///
/// [`GameCacheService`]: crate::service::game::GameCacheService
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// How long a cached game stays fresh before a refetch.
    pub freshness: Duration,
    /// Self-imposed rate limit between successive Steam calls in a batch.
    pub batch_delay: std::time::Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness: Duration::hours(DEFAULT_FRESHNESS_HOURS),
            batch_delay: std::time::Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            steam_api_url: optional_var("STEAM_API_URL"),
            host: optional_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var("PORT")?.unwrap_or(8080),
            cache: CacheConfig {
                freshness: parse_var("CACHE_FRESHNESS_HOURS")?
                    .map(Duration::hours)
                    .unwrap_or(Duration::hours(DEFAULT_FRESHNESS_HOURS)),
                batch_delay: parse_var("BATCH_FETCH_DELAY_MS")?
                    .map(std::time::Duration::from_millis)
                    .unwrap_or(std::time::Duration::from_millis(DEFAULT_BATCH_DELAY_MS)),
            },
        })
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn parse_var<T: std::str::FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("failed to parse {:?}", value),
            }),
        Err(_) => Ok(None),
    }
}

//! Game catalog fixture helpers.
//!
//! Provides database fixture insertion and mock Steam store endpoint
//! creation for tests exercising the game cache.

pub mod factory;
mod mockito;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{context::TestContext, error::TestError};

/// Game fixture helpers bound to a [`TestContext`].
///
/// Created via [`TestContext::game`].
pub struct GameFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> GameFixtures<'a> {
    pub(crate) fn new(setup: &'a mut TestContext) -> Self {
        Self { setup }
    }

    /// Insert a cached game row with the given `last_updated` timestamp.
    ///
    /// The row carries the minimal descriptive fields a cache write would
    /// have produced; tests control freshness through `last_updated`.
    pub async fn insert_cached_game(
        &mut self,
        steam_id: i64,
        name: &str,
        last_updated: NaiveDateTime,
    ) -> Result<entity::game::Model, TestError> {
        let game = entity::game::ActiveModel {
            steam_id: ActiveValue::Set(Some(steam_id)),
            name: ActiveValue::Set(name.to_string()),
            coming_soon: ActiveValue::Set(false),
            is_free: ActiveValue::Set(false),
            recommendations_total: ActiveValue::Set(0),
            achievements_count: ActiveValue::Set(0),
            steam_store_url: ActiveValue::Set(Some(format!(
                "https://store.steampowered.com/app/{}",
                steam_id
            ))),
            last_updated: ActiveValue::Set(last_updated),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(game.insert(&self.setup.db).await?)
    }

    /// Insert a cache status row with the given counters.
    pub async fn insert_cache_status(
        &mut self,
        steam_id: i64,
        fetch_count: i32,
        error_count: i32,
        last_error: Option<&str>,
    ) -> Result<entity::game_cache_status::Model, TestError> {
        let status = entity::game_cache_status::ActiveModel {
            steam_id: ActiveValue::Set(steam_id),
            last_fetched: ActiveValue::Set(Utc::now().naive_utc()),
            fetch_count: ActiveValue::Set(fetch_count),
            error_count: ActiveValue::Set(error_count),
            last_error: ActiveValue::Set(last_error.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(status.insert(&self.setup.db).await?)
    }
}

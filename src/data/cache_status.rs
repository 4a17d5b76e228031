use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct CacheStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CacheStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_steam_id(
        &self,
        steam_id: i64,
    ) -> Result<Option<entity::game_cache_status::Model>, DbErr> {
        entity::prelude::GameCacheStatus::find()
            .filter(entity::game_cache_status::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await
    }

    /// Record one fetch attempt against the Steam store.
    ///
    /// Every attempt bumps `fetch_count` and stamps `last_fetched`. A
    /// failed attempt additionally bumps `error_count` and stores the
    /// error message; a successful one clears `last_error`.
    pub async fn record_attempt(
        &self,
        steam_id: i64,
        error: Option<&str>,
    ) -> Result<entity::game_cache_status::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let status = entity::game_cache_status::ActiveModel {
            steam_id: ActiveValue::Set(steam_id),
            last_fetched: ActiveValue::Set(now),
            fetch_count: ActiveValue::Set(1),
            error_count: ActiveValue::Set(if error.is_some() { 1 } else { 0 }),
            last_error: ActiveValue::Set(error.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let error_increment = if error.is_some() { 1 } else { 0 };

        entity::prelude::GameCacheStatus::insert(status)
            .on_conflict(
                OnConflict::column(entity::game_cache_status::Column::SteamId)
                    .value(
                        entity::game_cache_status::Column::FetchCount,
                        Expr::col((
                            entity::game_cache_status::Entity,
                            entity::game_cache_status::Column::FetchCount,
                        ))
                        .add(1),
                    )
                    .value(
                        entity::game_cache_status::Column::ErrorCount,
                        Expr::col((
                            entity::game_cache_status::Entity,
                            entity::game_cache_status::Column::ErrorCount,
                        ))
                        .add(error_increment),
                    )
                    .update_columns([
                        entity::game_cache_status::Column::LastFetched,
                        entity::game_cache_status::Column::LastError,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// `(fetch_count, error_count)` of every entry, for aggregation.
    pub async fn counters(&self) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::GameCacheStatus::find()
            .select_only()
            .column(entity::game_cache_status::Column::FetchCount)
            .column(entity::game_cache_status::Column::ErrorCount)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use gamehub_test_utils::prelude::*;

    use super::*;

    /// First attempt should create the entry with counters at one
    #[tokio::test]
    async fn record_attempt_creates_entry() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = CacheStatusRepository::new(&test.db);
        let status = repo.record_attempt(730, None).await?;

        assert_eq!(status.steam_id, 730);
        assert_eq!(status.fetch_count, 1);
        assert_eq!(status.error_count, 0);
        assert_eq!(status.last_error, None);

        Ok(())
    }

    /// Repeated attempts should accumulate fetch and error counters
    #[tokio::test]
    async fn record_attempt_accumulates_counters() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = CacheStatusRepository::new(&test.db);
        repo.record_attempt(730, None).await?;
        repo.record_attempt(730, Some("store returned 500")).await?;
        let status = repo.record_attempt(730, Some("store returned 502")).await?;

        assert_eq!(status.fetch_count, 3);
        assert_eq!(status.error_count, 2);
        assert_eq!(status.last_error.as_deref(), Some("store returned 502"));

        Ok(())
    }

    /// A successful attempt after failures should clear the stored error
    #[tokio::test]
    async fn record_attempt_clears_error_on_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = CacheStatusRepository::new(&test.db);
        repo.record_attempt(570, Some("store returned 500")).await?;
        let status = repo.record_attempt(570, None).await?;

        assert_eq!(status.fetch_count, 2);
        assert_eq!(status.error_count, 1);
        assert_eq!(status.last_error, None);

        Ok(())
    }

    /// Counters should report one row per tracked steam_id
    #[tokio::test]
    async fn counters_report_all_entries() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = CacheStatusRepository::new(&test.db);
        repo.record_attempt(730, None).await?;
        repo.record_attempt(730, None).await?;
        repo.record_attempt(570, Some("store returned 500")).await?;

        let mut counters = repo.counters().await?;
        counters.sort();

        assert_eq!(counters, vec![(1, 1), (2, 0)]);

        Ok(())
    }
}

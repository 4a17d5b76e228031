use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};
use serde_json::Value;
use steam::model::AppDetails;

/// URL template for a game's Steam store page.
static STEAM_STORE_URL: &str = "https://store.steampowered.com/app";

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_steam_id(
        &self,
        steam_id: i64,
    ) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await
    }

    /// Insert or overwrite the cached row for a Steam app.
    ///
    /// Normalizes the store payload into the persisted shape; missing
    /// optional upstream fields become null/false/zero, never an error.
    /// On conflict every descriptive and commercial field is overwritten
    /// and `last_updated` is set to now; `id`, `created_at`, and the
    /// soft-delete fields are left untouched.
    pub async fn upsert(
        &self,
        steam_id: i64,
        details: AppDetails,
    ) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let release_date = details.release_date.unwrap_or_default();
        let metacritic = details.metacritic.unwrap_or_default();
        let price = details.price_overview.unwrap_or_default();

        let game = entity::game::ActiveModel {
            steam_id: ActiveValue::Set(Some(steam_id)),
            name: ActiveValue::Set(details.name),
            description: ActiveValue::Set(details.detailed_description),
            short_description: ActiveValue::Set(details.short_description),
            header_image: ActiveValue::Set(details.header_image),
            background_image: ActiveValue::Set(details.background),
            screenshots: ActiveValue::Set(details.screenshots),
            movies: ActiveValue::Set(details.movies),
            categories: ActiveValue::Set(details.categories),
            genres: ActiveValue::Set(details.genres),
            release_date: ActiveValue::Set(release_date.date),
            coming_soon: ActiveValue::Set(release_date.coming_soon),
            platforms: ActiveValue::Set(details.platforms),
            metacritic_score: ActiveValue::Set(metacritic.score),
            metacritic_url: ActiveValue::Set(metacritic.url),
            price_currency: ActiveValue::Set(price.currency),
            price_initial: ActiveValue::Set(price.initial),
            price_final: ActiveValue::Set(price.final_price),
            price_discount: ActiveValue::Set(price.discount_percent),
            price_initial_formatted: ActiveValue::Set(price.initial_formatted),
            price_final_formatted: ActiveValue::Set(price.final_formatted),
            dlc: ActiveValue::Set(details.dlc),
            requirements_minimum: ActiveValue::Set(requirements_field(
                details.pc_requirements.as_ref(),
                "minimum",
            )),
            requirements_recommended: ActiveValue::Set(requirements_field(
                details.pc_requirements.as_ref(),
                "recommended",
            )),
            supported_languages: ActiveValue::Set(details.supported_languages),
            website: ActiveValue::Set(details.website),
            developers: ActiveValue::Set(details.developers),
            publishers: ActiveValue::Set(details.publishers),
            is_free: ActiveValue::Set(details.is_free),
            game_type: ActiveValue::Set(details.app_type),
            recommendations_total: ActiveValue::Set(
                details.recommendations.and_then(|r| r.total).unwrap_or(0),
            ),
            achievements_count: ActiveValue::Set(
                details.achievements.and_then(|a| a.total).unwrap_or(0),
            ),
            steam_store_url: ActiveValue::Set(Some(format!("{}/{}", STEAM_STORE_URL, steam_id))),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Game::insert(game)
            .on_conflict(
                OnConflict::column(entity::game::Column::SteamId)
                    .update_columns([
                        entity::game::Column::Name,
                        entity::game::Column::Description,
                        entity::game::Column::ShortDescription,
                        entity::game::Column::HeaderImage,
                        entity::game::Column::BackgroundImage,
                        entity::game::Column::Screenshots,
                        entity::game::Column::Movies,
                        entity::game::Column::Categories,
                        entity::game::Column::Genres,
                        entity::game::Column::ReleaseDate,
                        entity::game::Column::ComingSoon,
                        entity::game::Column::Platforms,
                        entity::game::Column::MetacriticScore,
                        entity::game::Column::MetacriticUrl,
                        entity::game::Column::PriceCurrency,
                        entity::game::Column::PriceInitial,
                        entity::game::Column::PriceFinal,
                        entity::game::Column::PriceDiscount,
                        entity::game::Column::PriceInitialFormatted,
                        entity::game::Column::PriceFinalFormatted,
                        entity::game::Column::Dlc,
                        entity::game::Column::RequirementsMinimum,
                        entity::game::Column::RequirementsRecommended,
                        entity::game::Column::SupportedLanguages,
                        entity::game::Column::Website,
                        entity::game::Column::Developers,
                        entity::game::Column::Publishers,
                        entity::game::Column::IsFree,
                        entity::game::Column::GameType,
                        entity::game::Column::RecommendationsTotal,
                        entity::game::Column::AchievementsCount,
                        entity::game::Column::SteamStoreUrl,
                        entity::game::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// All non-deleted rows with a Steam id whose `last_updated` is older
    /// than the cutoff.
    pub async fn get_expired(
        &self,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::SteamId.is_not_null())
            .filter(entity::game::Column::LastUpdated.lt(cutoff))
            .filter(entity::game::Column::DeletedAt.is_null())
            .all(self.db)
            .await
    }

    /// `last_updated` of every row, for freshness aggregation.
    pub async fn last_updated_timestamps(&self) -> Result<Vec<NaiveDateTime>, DbErr> {
        entity::prelude::Game::find()
            .select_only()
            .column(entity::game::Column::LastUpdated)
            .into_tuple::<NaiveDateTime>()
            .all(self.db)
            .await
    }
}

fn requirements_field(requirements: Option<&Value>, key: &str) -> Option<String> {
    // Steam serializes empty requirements as `[]` instead of `{}`, so a
    // plain typed struct would reject real payloads.
    requirements
        .and_then(|r| r.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use gamehub_test_utils::prelude::*;

    use super::*;

    /// Upsert should create a row for a previously unseen steam_id
    #[tokio::test]
    async fn upsert_creates_new_row() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = GameRepository::new(&test.db);
        let created = repo
            .upsert(730, factory::mock_app_details("Counter-Strike 2"))
            .await?;

        assert_eq!(created.steam_id, Some(730));
        assert_eq!(created.name, "Counter-Strike 2");
        assert_eq!(
            created.steam_store_url.as_deref(),
            Some("https://store.steampowered.com/app/730")
        );
        assert_eq!(created.price_final, Some(999));
        assert_eq!(
            created.requirements_minimum.as_deref(),
            Some("<strong>Minimum:</strong> 4 GB RAM")
        );

        Ok(())
    }

    /// Upsert should overwrite descriptive fields but preserve the row id
    #[tokio::test]
    async fn upsert_preserves_identity() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = GameRepository::new(&test.db);
        let created = repo.upsert(730, factory::mock_app_details("Old Name")).await?;
        let updated = repo.upsert(730, factory::mock_app_details("New Name")).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New Name");
        assert!(updated.last_updated >= created.last_updated);

        Ok(())
    }

    /// Minimal store payloads should normalize to defaults, not errors
    #[tokio::test]
    async fn upsert_defaults_missing_optional_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_game_tables().build().await?;

        let repo = GameRepository::new(&test.db);
        let created = repo
            .upsert(440, factory::mock_minimal_app_details("Team Fortress 2"))
            .await?;

        assert_eq!(created.description, None);
        assert_eq!(created.price_final, None);
        assert!(!created.coming_soon);
        assert_eq!(created.recommendations_total, 0);
        assert_eq!(created.achievements_count, 0);

        Ok(())
    }

    /// Expired query should skip fresh, manually entered, and deleted rows
    #[tokio::test]
    async fn get_expired_filters_rows() -> Result<(), TestError> {
        use chrono::{Duration, Utc};
        use sea_orm::{ActiveValue, EntityTrait, IntoActiveModel};

        let now = Utc::now().naive_utc();
        let mut test = TestBuilder::new()
            .with_game_tables()
            .with_cached_game(730, "Counter-Strike 2", now - Duration::hours(25))
            .with_cached_game(570, "Dota 2", now - Duration::hours(1))
            .build()
            .await?;

        // Soft-delete an otherwise expired row
        let deleted = test
            .game()
            .insert_cached_game(252490, "Rust", now - Duration::hours(48))
            .await?;
        let mut deleted_am = deleted.into_active_model();
        deleted_am.deleted_at = ActiveValue::Set(Some(now));
        entity::prelude::Game::update(deleted_am).exec(&test.db).await?;

        let repo = GameRepository::new(&test.db);
        let expired = repo.get_expired(now - Duration::hours(24)).await?;

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].steam_id, Some(730));

        Ok(())
    }
}

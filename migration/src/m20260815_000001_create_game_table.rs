use sea_orm_migration::{prelude::*, schema::*};

static IDX_GAME_STEAM_ID: &str = "idx-game-steam_id";
static IDX_GAME_NAME: &str = "idx-game-name";
static IDX_GAME_LAST_UPDATED: &str = "idx-game-last_updated";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(big_integer_null(Game::SteamId))
                    .col(string(Game::Name))
                    .col(text_null(Game::Description))
                    .col(text_null(Game::ShortDescription))
                    .col(string_null(Game::HeaderImage))
                    .col(string_null(Game::BackgroundImage))
                    .col(json_binary_null(Game::Screenshots))
                    .col(json_binary_null(Game::Movies))
                    .col(json_binary_null(Game::Categories))
                    .col(json_binary_null(Game::Genres))
                    .col(string_null(Game::ReleaseDate))
                    .col(boolean(Game::ComingSoon))
                    .col(json_binary_null(Game::Platforms))
                    .col(integer_null(Game::MetacriticScore))
                    .col(string_null(Game::MetacriticUrl))
                    .col(string_null(Game::PriceCurrency))
                    .col(integer_null(Game::PriceInitial))
                    .col(integer_null(Game::PriceFinal))
                    .col(integer_null(Game::PriceDiscount))
                    .col(string_null(Game::PriceInitialFormatted))
                    .col(string_null(Game::PriceFinalFormatted))
                    .col(json_binary_null(Game::Dlc))
                    .col(text_null(Game::RequirementsMinimum))
                    .col(text_null(Game::RequirementsRecommended))
                    .col(text_null(Game::SupportedLanguages))
                    .col(string_null(Game::Website))
                    .col(json_binary_null(Game::Developers))
                    .col(json_binary_null(Game::Publishers))
                    .col(boolean(Game::IsFree))
                    .col(string_null(Game::Type))
                    .col(integer(Game::RecommendationsTotal))
                    .col(integer(Game::AchievementsCount))
                    .col(string_null(Game::SteamStoreUrl))
                    .col(timestamp(Game::LastUpdated))
                    .col(timestamp(Game::CreatedAt))
                    .col(timestamp_null(Game::DeletedAt))
                    .col(integer_null(Game::DeletedBy))
                    .col(text_null(Game::DeletionReason))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_STEAM_ID)
                    .table(Game::Table)
                    .col(Game::SteamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_NAME)
                    .table(Game::Table)
                    .col(Game::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_LAST_UPDATED)
                    .table(Game::Table)
                    .col(Game::LastUpdated)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_LAST_UPDATED)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_NAME)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_STEAM_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    SteamId,
    Name,
    Description,
    ShortDescription,
    HeaderImage,
    BackgroundImage,
    Screenshots,
    Movies,
    Categories,
    Genres,
    ReleaseDate,
    ComingSoon,
    Platforms,
    MetacriticScore,
    MetacriticUrl,
    PriceCurrency,
    PriceInitial,
    PriceFinal,
    PriceDiscount,
    PriceInitialFormatted,
    PriceFinalFormatted,
    Dlc,
    RequirementsMinimum,
    RequirementsRecommended,
    SupportedLanguages,
    Website,
    Developers,
    Publishers,
    IsFree,
    Type,
    RecommendationsTotal,
    AchievementsCount,
    SteamStoreUrl,
    LastUpdated,
    CreatedAt,
    DeletedAt,
    DeletedBy,
    DeletionReason,
}

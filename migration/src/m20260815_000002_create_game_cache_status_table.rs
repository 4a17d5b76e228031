use sea_orm_migration::{prelude::*, schema::*};

static IDX_GAME_CACHE_STATUS_STEAM_ID: &str = "idx-game_cache_status-steam_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameCacheStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(GameCacheStatus::Id))
                    .col(big_integer_uniq(GameCacheStatus::SteamId))
                    .col(timestamp(GameCacheStatus::LastFetched))
                    .col(integer(GameCacheStatus::FetchCount))
                    .col(integer(GameCacheStatus::ErrorCount))
                    .col(text_null(GameCacheStatus::LastError))
                    .col(timestamp(GameCacheStatus::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_CACHE_STATUS_STEAM_ID)
                    .table(GameCacheStatus::Table)
                    .col(GameCacheStatus::SteamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_CACHE_STATUS_STEAM_ID)
                    .table(GameCacheStatus::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameCacheStatus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GameCacheStatus {
    Table,
    Id,
    SteamId,
    LastFetched,
    FetchCount,
    ErrorCount,
    LastError,
    CreatedAt,
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fetch bookkeeping for one Steam app id.
///
/// One row per `steam_id` ever attempted; `fetch_count` counts every attempt
/// and `error_count` counts the failed ones. Both only ever increase.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_cache_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub steam_id: i64,
    pub last_fetched: DateTime,
    pub fetch_count: i32,
    pub error_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub last_error: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Locally mirrored Steam store catalog entry.
///
/// `steam_id` is nullable: manually entered games have no Steam counterpart.
/// List and object fields (screenshots, genres, platforms, ...) are stored as
/// opaque JSON blobs exactly as the store delivered them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub steam_id: Option<i64>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    pub header_image: Option<String>,
    pub background_image: Option<String>,
    pub screenshots: Option<Json>,
    pub movies: Option<Json>,
    pub categories: Option<Json>,
    pub genres: Option<Json>,
    pub release_date: Option<String>,
    pub coming_soon: bool,
    pub platforms: Option<Json>,
    pub metacritic_score: Option<i32>,
    pub metacritic_url: Option<String>,
    pub price_currency: Option<String>,
    pub price_initial: Option<i32>,
    pub price_final: Option<i32>,
    pub price_discount: Option<i32>,
    pub price_initial_formatted: Option<String>,
    pub price_final_formatted: Option<String>,
    pub dlc: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements_minimum: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements_recommended: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub supported_languages: Option<String>,
    pub website: Option<String>,
    pub developers: Option<Json>,
    pub publishers: Option<Json>,
    pub is_free: bool,
    #[sea_orm(column_name = "type")]
    pub game_type: Option<String>,
    pub recommendations_total: i32,
    pub achievements_count: i32,
    pub steam_store_url: Option<String>,
    pub last_updated: DateTime,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
    pub deleted_by: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub deletion_reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

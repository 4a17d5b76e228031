//! Response models for the Steam storefront API.
//!
//! Scalars the cache interprets are typed; list and object fields the cache
//! stores verbatim (screenshots, genres, platforms, etc.) stay as opaque
//! `serde_json::Value` blobs and pass through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `appdetails` response object.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppDetailsEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AppDetails>,
}

/// Store page details for a single app.
///
/// Every field except `name` is optional upstream; absent fields
/// deserialize to `None`/`false` rather than failing.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: Option<String>,
    pub detailed_description: Option<String>,
    pub short_description: Option<String>,
    pub header_image: Option<String>,
    pub background: Option<String>,
    pub screenshots: Option<Value>,
    pub movies: Option<Value>,
    pub categories: Option<Value>,
    pub genres: Option<Value>,
    pub platforms: Option<Value>,
    pub dlc: Option<Value>,
    pub developers: Option<Value>,
    pub publishers: Option<Value>,
    pub release_date: Option<ReleaseDate>,
    pub metacritic: Option<Metacritic>,
    pub price_overview: Option<PriceOverview>,
    // Steam serializes empty requirements as `[]` instead of `{}`, so this
    // stays an opaque Value and the cache extracts the fields it needs.
    pub pc_requirements: Option<Value>,
    pub supported_languages: Option<String>,
    pub website: Option<String>,
    pub is_free: bool,
    pub recommendations: Option<Recommendations>,
    pub achievements: Option<Achievements>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReleaseDate {
    pub coming_soon: bool,
    pub date: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Metacritic {
    pub score: Option<i32>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PriceOverview {
    pub currency: Option<String>,
    pub initial: Option<i32>,
    #[serde(rename = "final")]
    pub final_price: Option<i32>,
    pub discount_percent: Option<i32>,
    pub initial_formatted: Option<String>,
    pub final_formatted: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Recommendations {
    pub total: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Achievements {
    pub total: Option<i32>,
}

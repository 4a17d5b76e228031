//! Factories for mock Steam store payloads.

use serde_json::json;
use steam::model::{AppDetails, Metacritic, PriceOverview, ReleaseDate};

/// Build a fully populated `AppDetails` payload for the given name.
pub fn mock_app_details(name: &str) -> AppDetails {
    AppDetails {
        name: name.to_string(),
        app_type: Some("game".to_string()),
        detailed_description: Some(format!("{} detailed description", name)),
        short_description: Some(format!("{} short description", name)),
        header_image: Some("https://cdn.example/header.jpg".to_string()),
        background: Some("https://cdn.example/background.jpg".to_string()),
        screenshots: Some(json!([{ "id": 0, "path_full": "https://cdn.example/ss_full.jpg" }])),
        movies: Some(json!([])),
        categories: Some(json!([{ "id": 1, "description": "Multi-player" }])),
        genres: Some(json!([{ "id": "1", "description": "Action" }])),
        platforms: Some(json!({ "windows": true, "mac": false, "linux": true })),
        dlc: Some(json!([])),
        developers: Some(json!(["Example Studio"])),
        publishers: Some(json!(["Example Publisher"])),
        release_date: Some(ReleaseDate {
            coming_soon: false,
            date: Some("21 Aug, 2012".to_string()),
        }),
        metacritic: Some(Metacritic {
            score: Some(83),
            url: Some("https://www.metacritic.com/game/example".to_string()),
        }),
        price_overview: Some(PriceOverview {
            currency: Some("USD".to_string()),
            initial: Some(1999),
            final_price: Some(999),
            discount_percent: Some(50),
            initial_formatted: Some("$19.99".to_string()),
            final_formatted: Some("$9.99".to_string()),
        }),
        pc_requirements: Some(json!({
            "minimum": "<strong>Minimum:</strong> 4 GB RAM",
            "recommended": "<strong>Recommended:</strong> 8 GB RAM"
        })),
        supported_languages: Some("English, German".to_string()),
        website: Some("https://example.com".to_string()),
        is_free: false,
        recommendations: Some(steam::model::Recommendations { total: Some(1000) }),
        achievements: Some(steam::model::Achievements { total: Some(42) }),
    }
}

/// Build a minimal `AppDetails` payload with only a name, the way free or
/// unreleased apps often come back from the store.
pub fn mock_minimal_app_details(name: &str) -> AppDetails {
    AppDetails {
        name: name.to_string(),
        ..Default::default()
    }
}

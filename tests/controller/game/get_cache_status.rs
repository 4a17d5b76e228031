//! Tests for the get_cache_status endpoint.
//!
//! Verifies the cache statistics endpoint aggregates across populated and
//! empty catalog tables.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use gamehub::controller::game::get_cache_status;

use super::*;

/// Tests cache statistics over a populated catalog.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_cached_games() -> Result<(), TestError> {
    use chrono::{Duration, Utc};

    let now = Utc::now().naive_utc();
    let test = TestBuilder::new()
        .with_game_tables()
        .with_cached_game(730, "Counter-Strike 2", now - Duration::hours(1))
        .with_cached_game(570, "Dota 2", now - Duration::hours(30))
        .build()
        .await?;

    let result = get_cache_status(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests cache statistics over an empty catalog.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_game_tables().build().await?;

    let result = get_cache_status(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

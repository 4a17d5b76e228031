//! Tests for the get_game endpoint.
//!
//! Verifies cache-miss fetching, cache-hit serving, refetching of expired
//! entries, and error responses for unknown apps and store outages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use gamehub::controller::game::get_game;

use super::*;

/// Tests fetching a game that is not yet cached.
///
/// Expected: Ok with 200 OK response and one Steam store request
#[tokio::test]
async fn success_fetches_uncached_game() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_app_details_endpoint(730, factory::mock_app_details("Counter-Strike 2"), 1)
        .build()
        .await?;

    let result = get_game(State(test.to_app_state()), Path(730)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests serving a fresh cached game without calling the Steam store.
///
/// Expected: Ok with 200 OK response and zero Steam store requests
#[tokio::test]
async fn success_serves_fresh_game_from_cache() -> Result<(), TestError> {
    use chrono::{Duration, Utc};

    let test = TestBuilder::new()
        .with_game_tables()
        .with_cached_game(570, "Dota 2", Utc::now().naive_utc() - Duration::hours(1))
        .with_app_details_endpoint(570, factory::mock_app_details("Dota 2"), 0)
        .build()
        .await?;

    let result = get_game(State(test.to_app_state()), Path(570)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests refetching a cached game whose entry has expired.
///
/// Expected: Ok with 200 OK response and one Steam store request
#[tokio::test]
async fn success_refetches_expired_game() -> Result<(), TestError> {
    use chrono::{Duration, Utc};

    let test = TestBuilder::new()
        .with_game_tables()
        .with_cached_game(730, "Old Name", Utc::now().naive_utc() - Duration::hours(25))
        .with_app_details_endpoint(730, factory::mock_app_details("Counter-Strike 2"), 1)
        .build()
        .await?;

    let result = get_game(State(test.to_app_state()), Path(730)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests requesting an app id the Steam store does not know.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn not_found_for_unknown_app() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_app_details_not_found(999999999, 1)
        .build()
        .await?;

    let result = get_game(State(test.to_app_state()), Path(999999999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    test.assert_mocks();

    Ok(())
}

/// Tests requesting a game while the Steam store is failing.
///
/// Expected: Err mapping to 500 Internal Server Error
#[tokio::test]
async fn internal_error_for_store_outage() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_app_details_error(730, 500, 1)
        .build()
        .await?;

    let result = get_game(State(test.to_app_state()), Path(730)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    test.assert_mocks();

    Ok(())
}

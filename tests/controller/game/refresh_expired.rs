//! Tests for the refresh_expired endpoint.
//!
//! Verifies the manual trigger refetches only expired cache entries and
//! reports the refreshed count.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use gamehub::controller::game::refresh_expired;

use super::*;

/// Tests triggering a refresh with one expired and one fresh entry.
///
/// Expected: Ok with 200 OK response; only the expired game is refetched
#[tokio::test]
async fn success_refreshes_expired_entries() -> Result<(), TestError> {
    use chrono::{Duration, Utc};

    let now = Utc::now().naive_utc();
    let test = TestBuilder::new()
        .with_game_tables()
        .with_cached_game(730, "Counter-Strike 2", now - Duration::hours(25))
        .with_cached_game(570, "Dota 2", now - Duration::hours(1))
        .with_app_details_endpoint(730, factory::mock_app_details("Counter-Strike 2"), 1)
        .build()
        .await?;

    let result = refresh_expired(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests triggering a refresh when nothing is expired.
///
/// Expected: Ok with 200 OK response and zero Steam store requests
#[tokio::test]
async fn success_with_nothing_expired() -> Result<(), TestError> {
    use chrono::Utc;

    let test = TestBuilder::new()
        .with_game_tables()
        .with_cached_game(570, "Dota 2", Utc::now().naive_utc())
        .build()
        .await?;

    let result = refresh_expired(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

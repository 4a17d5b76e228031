//! Tests for the refresh_popular endpoint.
//!
//! Verifies the popular-games preload endpoint fetches the curated list and
//! tolerates individual store failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use gamehub::{
    controller::game::refresh_popular, model::app::AppState, service::game::POPULAR_STEAM_IDS,
};

use super::*;

/// App state with the batch delay zeroed so the preload tests do not pause
/// between the 15 mocked store calls.
fn fast_app_state(test: &TestContext) -> AppState {
    let mut state: AppState = test.to_app_state();
    state.cache.batch_delay = std::time::Duration::ZERO;
    state
}

/// Tests preloading the full popular games list.
///
/// Expected: Ok with 200 OK response and one store request per game
#[tokio::test]
async fn success_preloads_popular_games() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_game_tables();

    for &steam_id in POPULAR_STEAM_IDS.iter() {
        builder = builder.with_app_details_endpoint(
            steam_id,
            factory::mock_app_details(&format!("Game {}", steam_id)),
            1,
        );
    }

    let test = builder.build().await?;

    let result = refresh_popular(State(fast_app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

/// Tests preloading when one popular game is missing from the store.
///
/// Expected: Ok with 200 OK response; the missing game is skipped
#[tokio::test]
async fn success_skips_missing_popular_game() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_game_tables();

    for (position, &steam_id) in POPULAR_STEAM_IDS.iter().enumerate() {
        builder = if position == 0 {
            builder.with_app_details_not_found(steam_id, 1)
        } else {
            builder.with_app_details_endpoint(
                steam_id,
                factory::mock_app_details(&format!("Game {}", steam_id)),
                1,
            )
        };
    }

    let test = builder.build().await?;

    let result = refresh_popular(State(fast_app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    test.assert_mocks();

    Ok(())
}

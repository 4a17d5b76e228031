use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::Error,
    model::{
        api::{CacheStatsDto, ErrorDto, GameDto, RefreshDto},
        app::AppState,
    },
    service::game::GameCacheService,
};

pub static GAMES_TAG: &str = "games";

/// Get a game by Steam app id, fetching it from the Steam store if it is
/// not cached or the cached copy has expired
#[utoipa::path(
    get,
    path = "/api/games/{steam_id}",
    tag = GAMES_TAG,
    params(
        ("steam_id" = i64, Path, description = "Steam app id of the game")
    ),
    responses(
        (status = 200, description = "Success when retrieving game", body = GameDto),
        (status = 404, description = "Game not found on the Steam store", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(steam_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let game_service = GameCacheService::new(&state.db, &state.steam_client, state.cache.clone());

    let game = game_service.fetch_and_cache_game(steam_id).await?;

    Ok((StatusCode::OK, axum::Json(GameDto::from(game))))
}

/// Get aggregate cache health statistics
#[utoipa::path(
    get,
    path = "/api/games/cache/status",
    tag = GAMES_TAG,
    responses(
        (status = 200, description = "Success when retrieving cache statistics", body = CacheStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cache_status(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let game_service = GameCacheService::new(&state.db, &state.steam_client, state.cache.clone());

    let stats = game_service.get_cache_stats().await?;

    Ok((StatusCode::OK, axum::Json(CacheStatsDto::from(stats))))
}

/// Refetch every cached game older than the freshness window
#[utoipa::path(
    post,
    path = "/api/games/cache/refresh-expired",
    tag = GAMES_TAG,
    responses(
        (status = 200, description = "Success when refreshing expired cache entries", body = RefreshDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_expired(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let game_service = GameCacheService::new(&state.db, &state.steam_client, state.cache.clone());

    let refreshed_count = game_service.refresh_expired_cache().await?;

    Ok((
        StatusCode::OK,
        axum::Json(RefreshDto {
            message: "Expired cache entries refreshed".to_string(),
            refreshed_count,
        }),
    ))
}

/// Preload the catalog with a curated list of popular games
#[utoipa::path(
    post,
    path = "/api/games/popular/refresh",
    tag = GAMES_TAG,
    responses(
        (status = 200, description = "Success when refreshing popular games", body = RefreshDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_popular(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let game_service = GameCacheService::new(&state.db, &state.steam_client, state.cache.clone());

    let games = game_service.fetch_popular_games().await?;

    Ok((
        StatusCode::OK,
        axum::Json(RefreshDto {
            message: "Popular games refreshed".to_string(),
            refreshed_count: games.len(),
        }),
    ))
}

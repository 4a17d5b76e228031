//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::{http::StatusCode, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/games/{steam_id}` - Get a game, fetching from Steam on miss
/// - `GET /api/games/cache/status` - Aggregate cache health statistics
/// - `POST /api/games/cache/refresh-expired` - Refetch expired cache entries
/// - `POST /api/games/popular/refresh` - Preload popular games
/// - `GET /health` - Liveness probe
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` with
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "GameHub", description = "GameHub API"), tags(
        (name = controller::game::GAMES_TAG, description = "Game catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::game::get_game))
        .routes(routes!(controller::game::get_cache_status))
        .routes(routes!(controller::game::refresh_expired))
        .routes(routes!(controller::game::refresh_popular))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/health", get(health));

    routes
}

async fn health() -> StatusCode {
    StatusCode::OK
}

//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    board_handler, cards_handler, continents_handler, health_handler, history_handler,
    map_handler, map_image_handler, players_handler, rules_handler, stage_handler,
    stats_handler, territories_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /games/:game_id/{cards,players,stage,territories}` - Game state
/// - `GET /games/:game_id/{rules,map,board,continents}` - Game details
/// - `GET /games/:game_id/history` - Full move log
/// - `GET /games/:game_id/map-image` - Board artwork
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let games = Router::new()
        .route("/cards", get(cards_handler))
        .route("/players", get(players_handler))
        .route("/stage", get(stage_handler))
        .route("/territories", get(territories_handler))
        .route("/rules", get(rules_handler))
        .route("/map", get(map_handler))
        .route("/board", get(board_handler))
        .route("/continents", get(continents_handler))
        .route("/history", get(history_handler))
        .route("/map-image", get(map_image_handler));

    Router::new()
        .nest("/games/:game_id", games)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

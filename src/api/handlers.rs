//! API Handlers
//!
//! HTTP request handlers exposing the Warfish client as JSON.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::client::WarfishClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    Board, Cards, Continent, GameMap, HealthResponse, HistoryItem, Player, Rules, StageResponse,
    StatsResponse, Territory,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Caching Warfish client
    pub client: WarfishClient,
}

impl AppState {
    /// Creates a new AppState with the given client.
    pub fn new(client: WarfishClient) -> Self {
        Self { client }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(WarfishClient::new(config.clone())?))
    }
}

/// Handler for GET /games/:game_id/cards
pub async fn cards_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Cards>> {
    Ok(Json(state.client.cards(game_id).await?))
}

/// Handler for GET /games/:game_id/players
pub async fn players_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Vec<Player>>> {
    Ok(Json(state.client.players(game_id).await?))
}

/// Handler for GET /games/:game_id/stage
pub async fn stage_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<StageResponse>> {
    let stage = state.client.stage(game_id).await?;
    Ok(Json(StageResponse { stage }))
}

/// Handler for GET /games/:game_id/territories
pub async fn territories_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Vec<Territory>>> {
    Ok(Json(state.client.territories(game_id).await?))
}

/// Handler for GET /games/:game_id/rules
pub async fn rules_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Rules>> {
    Ok(Json(state.client.rules(game_id).await?))
}

/// Handler for GET /games/:game_id/map
pub async fn map_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Arc<GameMap>>> {
    Ok(Json(state.client.map(game_id).await?))
}

/// Handler for GET /games/:game_id/board
pub async fn board_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Board>> {
    Ok(Json(state.client.board(game_id).await?))
}

/// Handler for GET /games/:game_id/continents
pub async fn continents_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Vec<Continent>>> {
    Ok(Json(state.client.continents(game_id).await?))
}

/// Handler for GET /games/:game_id/history
pub async fn history_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<Arc<Vec<HistoryItem>>>> {
    Ok(Json(state.client.history_log(game_id).await?))
}

/// Handler for GET /games/:game_id/map-image
///
/// Returns the raw image bytes with the probed content type.
pub async fn map_image_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<impl IntoResponse> {
    let image = state.client.map_image(game_id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, image.mime_type.to_string()),
            (
                header::HeaderName::from_static("x-map-size"),
                format!("{}x{}", image.width, image.height),
            ),
        ],
        image.data,
    ))
}

/// Handler for GET /stats
///
/// Returns statistics summed over every dataset cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.client.cache_stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

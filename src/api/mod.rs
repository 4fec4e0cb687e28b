//! API Module
//!
//! HTTP handlers and routing for the Warfish proxy server.
//!
//! # Endpoints
//! - `GET /games/:game_id/cards` - Card trade-in state
//! - `GET /games/:game_id/players` - Players
//! - `GET /games/:game_id/stage` - Game stage
//! - `GET /games/:game_id/territories` - Territory ownership
//! - `GET /games/:game_id/rules` - Rules
//! - `GET /games/:game_id/map` - Map layout
//! - `GET /games/:game_id/board` - Board and borders
//! - `GET /games/:game_id/continents` - Continents
//! - `GET /games/:game_id/history` - Move log
//! - `GET /games/:game_id/map-image` - Board artwork
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

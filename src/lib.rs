//! Warfish - Typed client for the Warfish board-game service
//!
//! Fetches game state, details and history, normalizes them into typed
//! models, and keeps them in a namespaced TTL cache so repeated reads skip
//! the network.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TtlCache;
pub use client::WarfishClient;
pub use config::Config;
pub use error::{CacheError, WarfishError};

//! Data models
//!
//! Typed, normalized game data, the raw envelopes they are decoded from, and
//! the proxy server's own response bodies.

pub(crate) mod convert;
pub mod details;
pub mod history;
pub mod responses;
pub mod state;
pub mod wire;

// Re-export commonly used types
pub use details::{
    Board, Border, Color, Continent, GameDetails, GameMap, Limit, MapImage, MapTerritory,
    Position, Rules,
};
pub use history::{HistoryAction, HistoryItem};
pub use responses::{HealthResponse, StageResponse, StatsResponse};
pub use state::{Cards, GameState, Player, PlayerCardCount, Territory};

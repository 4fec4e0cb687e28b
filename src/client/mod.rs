//! Warfish Client Module
//!
//! Fetches game data from the Warfish REST API, normalizes it into typed
//! models and keeps it in per-dataset TTL caches.

mod details;
mod history;
mod map_image;
mod state;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{CacheStats, TtlCache};
use crate::config::Config;
use crate::error::{Result, WarfishError};
use crate::models::wire::Envelope;
use crate::models::{Board, Cards, Continent, GameMap, HistoryItem, Player, Rules, Territory};

/// Cache namespaces, one per dataset.
pub mod namespace {
    pub const CARDS: &str = "warfish-state-cards";
    pub const PLAYERS: &str = "warfish-state-players";
    pub const STAGE: &str = "warfish-state-stage";
    pub const TERRITORIES: &str = "warfish-state-territories";
    pub const RULES: &str = "warfish-details-rules";
    pub const MAP: &str = "warfish-details-map";
    pub const BOARD: &str = "warfish-details-board";
    pub const CONTINENTS: &str = "warfish-details-continents";
    pub const HISTORY: &str = "warfish-history-log";
}

/// One typed cache per dataset.
#[derive(Debug, Clone)]
struct Caches {
    cards: TtlCache<Cards>,
    players: TtlCache<Vec<Player>>,
    stage: TtlCache<u32>,
    territories: TtlCache<Vec<Territory>>,
    rules: TtlCache<Rules>,
    map: TtlCache<Arc<GameMap>>,
    board: TtlCache<Board>,
    continents: TtlCache<Vec<Continent>>,
    history: TtlCache<Arc<Vec<HistoryItem>>>,
}

impl Caches {
    fn new() -> Self {
        Self {
            cards: TtlCache::new(),
            players: TtlCache::new(),
            stage: TtlCache::new(),
            territories: TtlCache::new(),
            rules: TtlCache::new(),
            map: TtlCache::new(),
            board: TtlCache::new(),
            continents: TtlCache::new(),
            history: TtlCache::new(),
        }
    }

    fn stats(&self) -> CacheStats {
        self.cards.stats()
            + self.players.stats()
            + self.stage.stats()
            + self.territories.stats()
            + self.rules.stats()
            + self.map.stats()
            + self.board.stats()
            + self.continents.stats()
            + self.history.stats()
    }
}

// == Warfish Client ==
/// Client for the Warfish game service.
///
/// Cloning is cheap; clones share the HTTP connection pool and the caches.
#[derive(Debug, Clone)]
pub struct WarfishClient {
    http: reqwest::Client,
    config: Arc<Config>,
    caches: Caches,
}

impl WarfishClient {
    // == Constructor ==
    /// Creates a client from configuration.
    ///
    /// Must be called inside a Tokio runtime; cache timers are spawned on it.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            caches: Caches::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Statistics summed over every dataset cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }

    /// Calls one REST method and decodes the `_content` of its envelope.
    async fn fetch<T: DeserializeOwned>(&self, method: &str, params: &[(&str, String)]) -> Result<T> {
        let cookie = self.config.cookie.as_deref().ok_or(WarfishError::NoCookie)?;

        let response = self
            .http
            .get(&self.config.api_url)
            .query(&[("_method", method), ("_format", "json")])
            .query(params)
            .header(header::COOKIE, cookie)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WarfishError::FetchFailed {
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<serde_json::Value> = response.json().await?;
        if envelope.stat != "ok" {
            return Err(WarfishError::Stat {
                method: method.to_string(),
                stat: envelope.stat,
            });
        }

        let content = envelope.content.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(content)?)
    }
}

/// Cache lookup that treats `NoSuchKey` as a routine miss.
fn cached<V>(cache: &TtlCache<V>, namespace: &str, id: &str) -> Option<V>
where
    V: Clone + Send + Sync + 'static,
{
    match cache.get(namespace, id) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(namespace, id, error = %err, "Cache miss");
            None
        }
    }
}

//! Game state: cards, players, stage and territories.
//!
//! All four come from one `getState` call and share its cache lifetime.

use tracing::{info, instrument};

use super::{cached, namespace, WarfishClient};
use crate::error::Result;
use crate::models::wire::RawState;
use crate::models::{Cards, GameState, Player, Territory};

const GET_STATE: &str = "warfish.tables.getState";
const STATE_SECTIONS: &str = "cards,board,details,players";

impl WarfishClient {
    /// Card trade-in state.
    pub async fn cards(&self, game_id: u64) -> Result<Cards> {
        match cached(&self.caches.cards, namespace::CARDS, &game_id.to_string()) {
            Some(cards) => Ok(cards),
            None => Ok(self.refresh_state(game_id).await?.cards),
        }
    }

    /// Players in seat order.
    pub async fn players(&self, game_id: u64) -> Result<Vec<Player>> {
        match cached(&self.caches.players, namespace::PLAYERS, &game_id.to_string()) {
            Some(players) => Ok(players),
            None => Ok(self.refresh_state(game_id).await?.players),
        }
    }

    /// Current game stage.
    pub async fn stage(&self, game_id: u64) -> Result<u32> {
        match cached(&self.caches.stage, namespace::STAGE, &game_id.to_string()) {
            Some(stage) => Ok(stage),
            None => Ok(self.refresh_state(game_id).await?.stage),
        }
    }

    /// Territory ownership and unit counts.
    pub async fn territories(&self, game_id: u64) -> Result<Vec<Territory>> {
        match cached(&self.caches.territories, namespace::TERRITORIES, &game_id.to_string()) {
            Some(territories) => Ok(territories),
            None => Ok(self.refresh_state(game_id).await?.territories),
        }
    }

    /// Fetches the game state and repopulates every state cache.
    #[instrument(skip(self))]
    async fn refresh_state(&self, game_id: u64) -> Result<GameState> {
        let raw: RawState = self
            .fetch(
                GET_STATE,
                &[
                    ("gid", game_id.to_string()),
                    ("sections", STATE_SECTIONS.to_string()),
                ],
            )
            .await?;
        let state = GameState::try_from(raw)?;

        let id = game_id.to_string();
        let ttl = self.config.state_ttl();
        self.caches
            .cards
            .put(namespace::CARDS, &id, state.cards.clone(), ttl);
        self.caches
            .players
            .put(namespace::PLAYERS, &id, state.players.clone(), ttl);
        self.caches.stage.put(namespace::STAGE, &id, state.stage, ttl);
        self.caches
            .territories
            .put(namespace::TERRITORIES, &id, state.territories.clone(), ttl);

        info!(
            game_id,
            players = state.players.len(),
            territories = state.territories.len(),
            "Game state refreshed"
        );
        Ok(state)
    }
}

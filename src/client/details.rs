//! Game details: rules, map, board and continents.
//!
//! All four come from one `getDetails` call. They never change once a game
//! has started, so they are cached far longer than the game state.

use std::sync::Arc;

use tracing::{info, instrument};

use super::{cached, namespace, WarfishClient};
use crate::error::Result;
use crate::models::wire::RawDetails;
use crate::models::{Board, Continent, GameDetails, GameMap, Rules};

const GET_DETAILS: &str = "warfish.tables.getDetails";
const DETAILS_SECTIONS: &str = "board,rules,map,continents";

impl WarfishClient {
    pub async fn rules(&self, game_id: u64) -> Result<Rules> {
        match cached(&self.caches.rules, namespace::RULES, &game_id.to_string()) {
            Some(rules) => Ok(rules),
            None => Ok(self.refresh_details(game_id).await?.rules),
        }
    }

    /// Map layout: colors, territory positions, logo and legend placement.
    pub async fn map(&self, game_id: u64) -> Result<Arc<GameMap>> {
        match cached(&self.caches.map, namespace::MAP, &game_id.to_string()) {
            Some(map) => Ok(map),
            None => Ok(Arc::new(self.refresh_details(game_id).await?.map)),
        }
    }

    /// Board id, dimensions and attack borders.
    pub async fn board(&self, game_id: u64) -> Result<Board> {
        match cached(&self.caches.board, namespace::BOARD, &game_id.to_string()) {
            Some(board) => Ok(board),
            None => Ok(self.refresh_details(game_id).await?.board),
        }
    }

    pub async fn continents(&self, game_id: u64) -> Result<Vec<Continent>> {
        match cached(&self.caches.continents, namespace::CONTINENTS, &game_id.to_string()) {
            Some(continents) => Ok(continents),
            None => Ok(self.refresh_details(game_id).await?.continents),
        }
    }

    /// Fetches the game details and repopulates every details cache.
    #[instrument(skip(self))]
    async fn refresh_details(&self, game_id: u64) -> Result<GameDetails> {
        let raw: RawDetails = self
            .fetch(
                GET_DETAILS,
                &[
                    ("gid", game_id.to_string()),
                    ("sections", DETAILS_SECTIONS.to_string()),
                ],
            )
            .await?;
        let details = GameDetails::try_from(raw)?;

        let id = game_id.to_string();
        let ttl = self.config.details_ttl();
        self.caches
            .rules
            .put(namespace::RULES, &id, details.rules.clone(), ttl);
        self.caches
            .map
            .put(namespace::MAP, &id, Arc::new(details.map.clone()), ttl);
        self.caches
            .board
            .put(namespace::BOARD, &id, details.board.clone(), ttl);
        self.caches
            .continents
            .put(namespace::CONTINENTS, &id, details.continents.clone(), ttl);

        info!(game_id, board = details.board.id, "Game details refreshed");
        Ok(details)
    }
}

//! Game state models: cards, players, stage and territory ownership.
//!
//! These change every turn and are cached briefly.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarfishError};
use crate::models::convert::{flag, number};
use crate::models::wire::{RawArea, RawCardPlayer, RawCards, RawPlayer, RawState};

/// Card trade-in state for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cards {
    pub sets_traded: u32,
    /// Upcoming set values, as published by the service
    pub next_sets_worth: String,
    pub cards_discarded: u32,
    pub next_set_worth: u32,
    pub player_counts: Vec<PlayerCardCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardCount {
    pub seat: u32,
    pub number_of_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub color_id: u32,
    pub is_turn: bool,
    pub is_alive: bool,
    pub team_id: i32,
    pub reserve_units: u32,
    pub profile_id: String,
    pub seat: u32,
}

/// Ownership and garrison of one territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub territory_id: u32,
    /// Owning seat; negative for neutral territories
    pub seat: i32,
    pub units: u32,
}

/// Everything one `getState` call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub cards: Cards,
    pub players: Vec<Player>,
    pub stage: u32,
    pub territories: Vec<Territory>,
}

impl TryFrom<RawCardPlayer> for PlayerCardCount {
    type Error = WarfishError;

    fn try_from(raw: RawCardPlayer) -> Result<Self> {
        Ok(Self {
            seat: number("cards.player.id", &raw.id)?,
            number_of_cards: number("cards.player.num", &raw.num)?,
        })
    }
}

impl TryFrom<RawCards> for Cards {
    type Error = WarfishError;

    fn try_from(raw: RawCards) -> Result<Self> {
        Ok(Self {
            sets_traded: number("cards.cardsetstraded", &raw.cardsetstraded)?,
            next_sets_worth: raw.nextcardsworth,
            cards_discarded: number("cards.numdiscard", &raw.numdiscard)?,
            next_set_worth: number("cards.worth", &raw.worth)?,
            player_counts: raw
                .content
                .player
                .into_iter()
                .map(PlayerCardCount::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

impl TryFrom<RawPlayer> for Player {
    type Error = WarfishError;

    fn try_from(raw: RawPlayer) -> Result<Self> {
        Ok(Self {
            color_id: number("players.player.colorid", &raw.colorid)?,
            is_turn: flag(&raw.isturn),
            is_alive: flag(&raw.active),
            team_id: number("players.player.teamid", &raw.teamid)?,
            reserve_units: number("players.player.units", &raw.units)?,
            seat: number("players.player.id", &raw.id)?,
            name: raw.name,
            profile_id: raw.profileid,
        })
    }
}

impl TryFrom<RawArea> for Territory {
    type Error = WarfishError;

    fn try_from(raw: RawArea) -> Result<Self> {
        Ok(Self {
            territory_id: number("board.area.id", &raw.id)?,
            seat: number("board.area.playerid", &raw.playerid)?,
            units: number("board.area.units", &raw.units)?,
        })
    }
}

impl TryFrom<RawState> for GameState {
    type Error = WarfishError;

    fn try_from(raw: RawState) -> Result<Self> {
        Ok(Self {
            cards: Cards::try_from(raw.cards)?,
            players: raw
                .players
                .content
                .player
                .into_iter()
                .map(Player::try_from)
                .collect::<Result<_>>()?,
            stage: number("details.stage", &raw.details.stage)?,
            territories: raw
                .board
                .content
                .area
                .into_iter()
                .map(Territory::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

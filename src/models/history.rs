//! History log models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WarfishError};
use crate::models::convert::{number, optional_number, optional_number_list, timestamp};
use crate::models::wire::RawMove;

/// Kind of move recorded in the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Attack,
    EliminationBonus,
    Capture,
    Decline,
    Elimination,
    Transfer,
    AwardedCard,
    CapturedCards,
    CaptureReserveUnits,
    Join,
    BaoSeatOrder,
    BaoTerritorySelect,
    Message,
    NewGame,
    AssignSeat,
    PlaceUnit,
    BaoTransfer,
    Reshuffle,
    Start,
    SelectTerritory,
    UseCards,
    BaoAttack,
    Win,
    NeutralTerritorySelect,
    BonusUnits,
    Surrender,
    Booted,
    GameTerminated,
    TeamWin,
}

impl HistoryAction {
    /// Wire code used by the movelog.
    pub fn code(&self) -> &'static str {
        match self {
            HistoryAction::Attack => "a",
            HistoryAction::EliminationBonus => "b",
            HistoryAction::Capture => "c",
            HistoryAction::Decline => "d",
            HistoryAction::Elimination => "e",
            HistoryAction::Transfer => "f",
            HistoryAction::AwardedCard => "g",
            HistoryAction::CapturedCards => "h",
            HistoryAction::CaptureReserveUnits => "i",
            HistoryAction::Join => "j",
            HistoryAction::BaoSeatOrder => "k",
            HistoryAction::BaoTerritorySelect => "l",
            HistoryAction::Message => "m",
            HistoryAction::NewGame => "n",
            HistoryAction::AssignSeat => "o",
            HistoryAction::PlaceUnit => "p",
            HistoryAction::BaoTransfer => "q",
            HistoryAction::Reshuffle => "r",
            HistoryAction::Start => "s",
            HistoryAction::SelectTerritory => "t",
            HistoryAction::UseCards => "u",
            HistoryAction::BaoAttack => "v",
            HistoryAction::Win => "w",
            HistoryAction::NeutralTerritorySelect => "y",
            HistoryAction::BonusUnits => "z",
            HistoryAction::Surrender => "sr",
            HistoryAction::Booted => "bt",
            HistoryAction::GameTerminated => "tg",
            HistoryAction::TeamWin => "tw",
        }
    }
}

impl FromStr for HistoryAction {
    type Err = WarfishError;

    fn from_str(code: &str) -> Result<Self> {
        let action = match code {
            "a" => HistoryAction::Attack,
            "b" => HistoryAction::EliminationBonus,
            "c" => HistoryAction::Capture,
            "d" => HistoryAction::Decline,
            "e" => HistoryAction::Elimination,
            "f" => HistoryAction::Transfer,
            "g" => HistoryAction::AwardedCard,
            "h" => HistoryAction::CapturedCards,
            "i" => HistoryAction::CaptureReserveUnits,
            "j" => HistoryAction::Join,
            "k" => HistoryAction::BaoSeatOrder,
            "l" => HistoryAction::BaoTerritorySelect,
            "m" => HistoryAction::Message,
            "n" => HistoryAction::NewGame,
            "o" => HistoryAction::AssignSeat,
            "p" => HistoryAction::PlaceUnit,
            "q" => HistoryAction::BaoTransfer,
            "r" => HistoryAction::Reshuffle,
            "s" => HistoryAction::Start,
            "t" => HistoryAction::SelectTerritory,
            "u" => HistoryAction::UseCards,
            "v" => HistoryAction::BaoAttack,
            "w" => HistoryAction::Win,
            "y" => HistoryAction::NeutralTerritorySelect,
            "z" => HistoryAction::BonusUnits,
            "sr" => HistoryAction::Surrender,
            "bt" => HistoryAction::Booted,
            "tg" => HistoryAction::GameTerminated,
            "tw" => HistoryAction::TeamWin,
            other => return Err(WarfishError::UnknownActionCode(other.to_string())),
        };
        Ok(action)
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of a game's move log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: u64,
    pub time: DateTime<Utc>,
    pub action: HistoryAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Negative for neutral seats
    pub seat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacker_dice: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_dice: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_seat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacker_lost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_lost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bao_order_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_territory_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_territory_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated_seat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_list: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_list: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<u32>,
}

impl TryFrom<RawMove> for HistoryItem {
    type Error = WarfishError;

    fn try_from(raw: RawMove) -> Result<Self> {
        Ok(Self {
            id: number("movelog.m.id", &raw.id)?,
            time: timestamp("movelog.m.t", &raw.t)?,
            action: raw.a.parse()?,
            seat: optional_number("movelog.m.s", raw.s.as_ref())?,
            log_version: optional_number("movelog.m.logver", raw.logver.as_ref())?,
            territory_id: optional_number("movelog.m.cid", raw.cid.as_ref())?,
            number: optional_number("movelog.m.num", raw.num.as_ref())?,
            attacker_dice: optional_number_list("movelog.m.ad", raw.ad.as_ref())?,
            defender_dice: optional_number_list("movelog.m.dd", raw.dd.as_ref())?,
            defender_seat: optional_number("movelog.m.ds", raw.ds.as_ref())?,
            attacker_lost: optional_number("movelog.m.al", raw.al.as_ref())?,
            defender_lost: optional_number("movelog.m.dl", raw.dl.as_ref())?,
            bao_order_id: optional_number("movelog.m.oid", raw.oid.as_ref())?,
            to_territory_id: optional_number("movelog.m.tcid", raw.tcid.as_ref())?,
            from_territory_id: optional_number("movelog.m.fcid", raw.fcid.as_ref())?,
            eliminated_seat: optional_number("movelog.m.es", raw.es.as_ref())?,
            team_id: optional_number("movelog.m.tid", raw.tid.as_ref())?,
            seat_list: optional_number_list("movelog.m.slist", raw.slist.as_ref())?,
            card_list: optional_number_list("movelog.m.clist", raw.clist.as_ref())?,
            card_id: optional_number("movelog.m.cardid", raw.cardid.as_ref())?,
        })
    }
}

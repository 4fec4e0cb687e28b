//! Wire envelopes for the Warfish REST API
//!
//! The service wraps every payload as `{"stat": "ok", "_content": {...}}` and
//! encodes numbers and flags as strings. These types mirror that layout
//! field-for-field; the typed models convert from them.

use serde::Deserialize;

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub stat: String,
    #[serde(rename = "_content")]
    pub content: Option<T>,
}

/// Nested `_content` wrapper used by list-bearing sections.
#[derive(Debug, Clone, Deserialize)]
pub struct Nested<T> {
    #[serde(rename = "_content")]
    pub content: T,
}

// == getState ==

#[derive(Debug, Clone, Deserialize)]
pub struct RawState {
    pub cards: RawCards,
    pub players: Nested<RawPlayerList>,
    pub details: RawStateDetails,
    pub board: Nested<RawAreaList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCards {
    pub cardsetstraded: String,
    pub nextcardsworth: String,
    pub numdiscard: String,
    pub worth: String,
    #[serde(rename = "_content")]
    pub content: RawCardPlayerList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCardPlayerList {
    #[serde(default)]
    pub player: Vec<RawCardPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCardPlayer {
    pub num: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerList {
    #[serde(default)]
    pub player: Vec<RawPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    pub name: String,
    pub colorid: String,
    pub isturn: String,
    pub active: String,
    pub teamid: String,
    pub units: String,
    pub profileid: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStateDetails {
    pub stage: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAreaList {
    #[serde(default)]
    pub area: Vec<RawArea>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArea {
    pub playerid: String,
    pub units: String,
    pub id: String,
}

// == getDetails ==

#[derive(Debug, Clone, Deserialize)]
pub struct RawDetails {
    pub rules: RawRules,
    pub map: RawMap,
    pub board: RawBoard,
    pub continents: Nested<RawContinentList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRules {
    pub maxpercountry: String,
    pub hascards: String,
    pub afdie: String,
    pub teamgame: String,
    pub numtransfers: String,
    pub ddie: String,
    pub teamtransfer: String,
    pub boottime: String,
    pub numreserves: String,
    pub fog: String,
    pub continuousattack: String,
    pub numattacks: String,
    pub keeppossession: String,
    pub pretransfer: String,
    pub allowabandon: String,
    pub returntoplace: String,
    pub adie: String,
    pub cardscale: String,
    pub dfdie: String,
    pub baoplay: String,
    pub teamplaceunits: String,
    pub returntoattack: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMap {
    pub numterritories: String,
    pub fillednumbers: String,
    #[serde(default)]
    pub fillmode: Option<String>,
    /// Misspelled `fillmode` sent by some boards
    #[serde(default)]
    pub fillmore: Option<String>,
    pub logox: String,
    pub logoy: String,
    pub logourl: String,
    pub legendx: String,
    pub legendy: String,
    pub height: String,
    pub width: String,
    pub dispcnames: String,
    pub circlemode: String,
    #[serde(rename = "_content")]
    pub content: RawMapContent,
}

impl RawMap {
    /// Fill mode under either spelling, `fillmode` taking precedence.
    pub fn fill_mode(&self) -> &str {
        self.fillmode
            .as_deref()
            .or(self.fillmore.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMapContent {
    #[serde(default)]
    pub color: Vec<RawColor>,
    #[serde(default)]
    pub territory: Vec<RawMapTerritory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawColor {
    pub id: String,
    pub name: String,
    pub red: String,
    pub green: String,
    pub blue: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMapTerritory {
    pub id: String,
    pub name: String,
    pub maxunits: String,
    pub x: String,
    pub y: String,
    pub textx: String,
    pub texty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBoard {
    pub boardid: String,
    pub height: String,
    pub width: String,
    #[serde(rename = "_content")]
    pub content: RawBorderList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBorderList {
    #[serde(default)]
    pub border: Vec<RawBorder>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBorder {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContinentList {
    #[serde(default)]
    pub continent: Vec<RawContinent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContinent {
    pub id: String,
    pub name: String,
    pub units: String,
    pub cids: String,
}

// == getHistory ==

#[derive(Debug, Clone, Deserialize)]
pub struct RawHistory {
    pub movelog: RawMoveLog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoveLog {
    pub total: String,
    #[serde(default)]
    pub m: Vec<RawMove>,
}

/// One history record. Only `id`, `t` and `a` are always present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMove {
    pub id: String,
    pub t: String,
    pub a: String,
    pub s: Option<String>,
    pub logver: Option<String>,
    pub cid: Option<String>,
    pub num: Option<String>,
    pub ad: Option<String>,
    pub dd: Option<String>,
    pub ds: Option<String>,
    pub al: Option<String>,
    pub dl: Option<String>,
    pub oid: Option<String>,
    pub tcid: Option<String>,
    pub fcid: Option<String>,
    pub es: Option<String>,
    pub tid: Option<String>,
    pub slist: Option<String>,
    pub clist: Option<String>,
    pub cardid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_content() {
        let json = r#"{"stat": "fail"}"#;
        let envelope: Envelope<RawHistory> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.stat, "fail");
        assert!(envelope.content.is_none());
    }

    #[test]
    fn test_move_optional_fields() {
        let json = r#"{"id": "12", "t": "1700000000", "a": "a", "ad": "6,5,1"}"#;
        let raw: RawMove = serde_json::from_str(json).unwrap();
        assert_eq!(raw.a, "a");
        assert_eq!(raw.ad.as_deref(), Some("6,5,1"));
        assert!(raw.dd.is_none());
    }

    #[test]
    fn test_map_accepts_fillmore_spelling() {
        let json = r#"{
            "numterritories": "2", "fillednumbers": "0", "fillmore": "1",
            "logox": "0", "logoy": "0", "logourl": "", "legendx": "0", "legendy": "0",
            "height": "10", "width": "10", "dispcnames": "1", "circlemode": "0",
            "_content": {}
        }"#;
        let raw: RawMap = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fill_mode(), "1");
        assert!(raw.content.color.is_empty());
    }

    #[test]
    fn test_map_with_both_fill_spellings() {
        let json = r#"{
            "numterritories": "2", "fillednumbers": "0", "fillmode": "1", "fillmore": "0",
            "logox": "0", "logoy": "0", "logourl": "", "legendx": "0", "legendy": "0",
            "height": "10", "width": "10", "dispcnames": "1", "circlemode": "0",
            "_content": {}
        }"#;
        let raw: RawMap = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fill_mode(), "1");
    }

    #[test]
    fn test_map_without_fill_mode() {
        let json = r#"{
            "numterritories": "2", "fillednumbers": "0",
            "logox": "0", "logoy": "0", "logourl": "", "legendx": "0", "legendy": "0",
            "height": "10", "width": "10", "dispcnames": "1", "circlemode": "0",
            "_content": {}
        }"#;
        let raw: RawMap = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fill_mode(), "");
    }
}

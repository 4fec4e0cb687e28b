//! Game details models: rules, map layout, board graph and continents.
//!
//! These are fixed for the lifetime of a game and can be cached for days.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarfishError};
use crate::models::convert::{flag, limit, number, number_list};
use crate::models::wire::{
    RawBoard, RawBorder, RawColor, RawContinent, RawDetails, RawMap, RawMapTerritory, RawRules,
};

/// Per-turn cap on an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Limit {
    Unlimited,
    Max(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub max_units_per_territory: u32,
    pub has_cards: bool,
    /// Lowest attacker die roll that kills (0-9)
    pub damage_die_attack_minimum: u32,
    pub team_game: bool,
    pub max_fortifications: Limit,
    pub defense_die_sides: u32,
    pub team_transfers: bool,
    /// Seconds a turn may run before the player can be booted
    pub boot_time: u32,
    pub max_reserve_units: u32,
    pub fog: u32,
    pub allow_continuous_attack: bool,
    pub max_attacks: Limit,
    pub keep_possession: bool,
    pub allow_pretransfer: bool,
    pub allow_abandon: bool,
    pub allow_return_to_place: bool,
    pub attack_die_sides: u32,
    pub card_scale: String,
    /// Lowest defender die roll that kills (0-3)
    pub damage_die_defense_minimum: u32,
    pub blind_at_once_play: bool,
    pub team_place: bool,
    pub allow_return_to_attack: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: u32,
    pub name: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTerritory {
    pub id: u32,
    pub name: String,
    pub max_units: u32,
    /// Where the fill or circle is drawn
    pub x: i32,
    pub y: i32,
    /// Label offset from (x, y)
    pub text_offset_x: i32,
    pub text_offset_y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub number_of_territories: u32,
    pub filled_numbers: bool,
    pub fill_mode: bool,
    pub logo_position: Position,
    pub logo_url: String,
    pub legend_position: Position,
    pub height: u32,
    pub width: u32,
    pub display_territory_names: bool,
    pub circle_mode: bool,
    pub colors: Vec<Color>,
    pub territories: Vec<MapTerritory>,
}

/// Attack adjacency: `from` may attack `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub height: u32,
    pub width: u32,
    pub borders: Vec<Border>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Continent {
    pub id: u32,
    pub name: String,
    /// Bonus units for holding the whole continent
    pub units: u32,
    pub territory_ids: Vec<u32>,
}

/// Everything one `getDetails` call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetails {
    pub rules: Rules,
    pub map: GameMap,
    pub board: Board,
    pub continents: Vec<Continent>,
}

/// Board artwork fetched from the image host.
#[derive(Debug, Clone, PartialEq)]
pub struct MapImage {
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

impl TryFrom<RawRules> for Rules {
    type Error = WarfishError;

    fn try_from(raw: RawRules) -> Result<Self> {
        Ok(Self {
            max_units_per_territory: number("rules.maxpercountry", &raw.maxpercountry)?,
            has_cards: flag(&raw.hascards),
            damage_die_attack_minimum: number("rules.afdie", &raw.afdie)?,
            team_game: flag(&raw.teamgame),
            max_fortifications: limit("rules.numtransfers", &raw.numtransfers)?,
            defense_die_sides: number("rules.ddie", &raw.ddie)?,
            team_transfers: flag(&raw.teamtransfer),
            boot_time: number("rules.boottime", &raw.boottime)?,
            max_reserve_units: number("rules.numreserves", &raw.numreserves)?,
            fog: number("rules.fog", &raw.fog)?,
            allow_continuous_attack: flag(&raw.continuousattack),
            max_attacks: limit("rules.numattacks", &raw.numattacks)?,
            keep_possession: flag(&raw.keeppossession),
            allow_pretransfer: flag(&raw.pretransfer),
            allow_abandon: flag(&raw.allowabandon),
            allow_return_to_place: flag(&raw.returntoplace),
            attack_die_sides: number("rules.adie", &raw.adie)?,
            card_scale: raw.cardscale,
            damage_die_defense_minimum: number("rules.dfdie", &raw.dfdie)?,
            blind_at_once_play: flag(&raw.baoplay),
            team_place: flag(&raw.teamplaceunits),
            allow_return_to_attack: flag(&raw.returntoattack),
        })
    }
}

impl TryFrom<RawColor> for Color {
    type Error = WarfishError;

    fn try_from(raw: RawColor) -> Result<Self> {
        Ok(Self {
            id: number("map.color.id", &raw.id)?,
            red: number("map.color.red", &raw.red)?,
            green: number("map.color.green", &raw.green)?,
            blue: number("map.color.blue", &raw.blue)?,
            name: raw.name,
        })
    }
}

impl TryFrom<RawMapTerritory> for MapTerritory {
    type Error = WarfishError;

    fn try_from(raw: RawMapTerritory) -> Result<Self> {
        Ok(Self {
            id: number("map.territory.id", &raw.id)?,
            max_units: number("map.territory.maxunits", &raw.maxunits)?,
            x: number("map.territory.x", &raw.x)?,
            y: number("map.territory.y", &raw.y)?,
            text_offset_x: number("map.territory.textx", &raw.textx)?,
            text_offset_y: number("map.territory.texty", &raw.texty)?,
            name: raw.name,
        })
    }
}

impl TryFrom<RawMap> for GameMap {
    type Error = WarfishError;

    fn try_from(raw: RawMap) -> Result<Self> {
        Ok(Self {
            number_of_territories: number("map.numterritories", &raw.numterritories)?,
            filled_numbers: flag(&raw.fillednumbers),
            fill_mode: flag(raw.fill_mode()),
            logo_position: Position {
                x: number("map.logox", &raw.logox)?,
                y: number("map.logoy", &raw.logoy)?,
            },
            logo_url: raw.logourl,
            legend_position: Position {
                x: number("map.legendx", &raw.legendx)?,
                y: number("map.legendy", &raw.legendy)?,
            },
            height: number("map.height", &raw.height)?,
            width: number("map.width", &raw.width)?,
            display_territory_names: flag(&raw.dispcnames),
            circle_mode: flag(&raw.circlemode),
            colors: raw
                .content
                .color
                .into_iter()
                .map(Color::try_from)
                .collect::<Result<_>>()?,
            territories: raw
                .content
                .territory
                .into_iter()
                .map(MapTerritory::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

impl TryFrom<RawBorder> for Border {
    type Error = WarfishError;

    fn try_from(raw: RawBorder) -> Result<Self> {
        Ok(Self {
            from: number("board.border.a", &raw.a)?,
            to: number("board.border.b", &raw.b)?,
        })
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = WarfishError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Ok(Self {
            id: number("board.boardid", &raw.boardid)?,
            height: number("board.height", &raw.height)?,
            width: number("board.width", &raw.width)?,
            borders: raw
                .content
                .border
                .into_iter()
                .map(Border::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

impl TryFrom<RawContinent> for Continent {
    type Error = WarfishError;

    fn try_from(raw: RawContinent) -> Result<Self> {
        Ok(Self {
            id: number("continents.continent.id", &raw.id)?,
            units: number("continents.continent.units", &raw.units)?,
            territory_ids: number_list("continents.continent.cids", &raw.cids)?,
            name: raw.name,
        })
    }
}

impl TryFrom<RawDetails> for GameDetails {
    type Error = WarfishError;

    fn try_from(raw: RawDetails) -> Result<Self> {
        Ok(Self {
            rules: Rules::try_from(raw.rules)?,
            map: GameMap::try_from(raw.map)?,
            board: Board::try_from(raw.board)?,
            continents: raw
                .continents
                .content
                .continent
                .into_iter()
                .map(Continent::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_rules() -> serde_json::Value {
        json!({
            "maxpercountry": "50", "hascards": "1", "afdie": "4", "teamgame": "0",
            "numtransfers": "-1", "ddie": "6", "teamtransfer": "0", "boottime": "86400",
            "numreserves": "10", "fog": "0", "continuousattack": "1", "numattacks": "20",
            "keeppossession": "0", "pretransfer": "0", "allowabandon": "1",
            "returntoplace": "0", "adie": "6", "cardscale": "4,6,8,10", "dfdie": "1",
            "baoplay": "0", "teamplaceunits": "0", "returntoattack": "1"
        })
    }

    #[test]
    fn test_rules_conversion() {
        let raw: RawRules = serde_json::from_value(raw_rules()).unwrap();
        let rules = Rules::try_from(raw).unwrap();

        assert_eq!(rules.max_units_per_territory, 50);
        assert!(rules.has_cards);
        assert_eq!(rules.max_fortifications, Limit::Unlimited);
        assert_eq!(rules.max_attacks, Limit::Max(20));
        assert_eq!(rules.boot_time, 86_400);
        assert_eq!(rules.card_scale, "4,6,8,10");
        assert!(rules.allow_return_to_attack);
        assert!(!rules.blind_at_once_play);
    }

    #[test]
    fn test_continent_territory_ids() {
        let raw = RawContinent {
            id: "2".to_string(),
            name: "Europa".to_string(),
            units: "5".to_string(),
            cids: "1,2,3,7".to_string(),
        };
        let continent = Continent::try_from(raw).unwrap();

        assert_eq!(continent.territory_ids, vec![1, 2, 3, 7]);
        assert_eq!(continent.units, 5);
    }

    #[test]
    fn test_board_borders() {
        let raw: RawBoard = serde_json::from_value(json!({
            "boardid": "881", "height": "600", "width": "800",
            "_content": { "border": [{ "a": "1", "b": "2" }, { "a": "2", "b": "1" }] }
        }))
        .unwrap();
        let board = Board::try_from(raw).unwrap();

        assert_eq!(board.id, 881);
        assert_eq!(board.borders, vec![Border { from: 1, to: 2 }, Border { from: 2, to: 1 }]);
    }

    #[test]
    fn test_color_out_of_range_is_rejected() {
        let raw = RawColor {
            id: "1".to_string(),
            name: "red".to_string(),
            red: "256".to_string(),
            green: "0".to_string(),
            blue: "0".to_string(),
        };
        assert!(matches!(
            Color::try_from(raw),
            Err(WarfishError::InvalidField { field: "map.color.red", .. })
        ));
    }

    #[test]
    fn test_limit_serialization() {
        assert_eq!(serde_json::to_value(Limit::Unlimited).unwrap(), json!("unlimited"));
        assert_eq!(serde_json::to_value(Limit::Max(3)).unwrap(), json!({ "max": 3 }));
    }
}

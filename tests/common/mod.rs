//! Local stand-in for the Warfish service used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use warfish::Config;

pub const COOKIE: &str = "SESSION=test";

/// Moves in every mock game's history.
pub const HISTORY_TOTAL: u64 = 5;

/// Game whose history has no moves yet.
pub const EMPTY_HISTORY_GAME: u64 = 7;

/// Game id answered with HTTP 500.
pub const FAILING_GAME: u64 = 500;

/// Board id derived from a game id.
pub fn board_id(game_id: u64) -> u64 {
    880 + game_id
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct MockWarfish {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockWarfish {
    /// Starts the mock on an ephemeral local port.
    pub async fn spawn() -> Self {
        let state = MockState::default();
        let requests = state.requests.clone();

        let app = Router::new()
            .route("/war/services/rest", get(rest_handler))
            .route("/images/:file", get(image_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Client configuration pointing at this mock.
    pub fn config(&self) -> Config {
        Config {
            api_url: format!("http://{}/war/services/rest", self.addr),
            image_url: format!("http://{}/images", self.addr),
            history_page_size: 2,
            ..Config::default()
        }
        .with_cookie(COOKIE)
    }

    /// Number of recorded requests whose label starts with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|label| label.starts_with(prefix))
            .count()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn rest_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let method = params.get("_method").cloned().unwrap_or_default();
    let game_id: u64 = params
        .get("gid")
        .and_then(|gid| gid.parse().ok())
        .unwrap_or_default();
    let start = params.get("start").cloned().unwrap_or_default();
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{} start={}", method, start));

    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    if cookie != Some(COOKIE) {
        return Json(json!({ "stat": "fail", "err": { "code": "1", "msg": "Not logged in" } }))
            .into_response();
    }

    if game_id == FAILING_GAME {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let content = match method.as_str() {
        "warfish.tables.getState" => state_content(),
        "warfish.tables.getDetails" => details_content(game_id),
        "warfish.tables.getHistory" => {
            let start: i64 = start.parse().unwrap_or(0);
            let num: u64 = params
                .get("num")
                .and_then(|num| num.parse().ok())
                .unwrap_or(1);
            history_content(game_id, start, num)
        }
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(json!({ "stat": "ok", "_content": content })).into_response()
}

async fn image_handler(State(state): State<MockState>, Path(file): Path<String>) -> Response {
    state.requests.lock().unwrap().push(format!("image {}", file));

    if file == format!("b{}g0s0.jpg", board_id(1)) {
        ([(header::CONTENT_TYPE, "image/jpeg")], vec![0xFF_u8, 0xD8, 0xFF]).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn state_content() -> Value {
    json!({
        "cards": {
            "cardsetstraded": "2",
            "nextcardsworth": "8,10,12",
            "numdiscard": "6",
            "worth": "8",
            "_content": { "player": [{ "num": "3", "id": "0" }, { "num": "1", "id": "1" }] }
        },
        "players": { "_content": { "player": [{
            "name": "alice", "colorid": "1", "isturn": "1", "active": "1",
            "teamid": "0", "units": "4", "profileid": "1001", "id": "0"
        }, {
            "name": "bob", "colorid": "2", "isturn": "0", "active": "1",
            "teamid": "0", "units": "0", "profileid": "1002", "id": "1"
        }] } },
        "details": { "stage": "3" },
        "board": { "_content": { "area": [
            { "playerid": "0", "units": "5", "id": "1" },
            { "playerid": "1", "units": "2", "id": "2" },
            { "playerid": "1", "units": "1", "id": "3" }
        ] } }
    })
}

fn details_content(game_id: u64) -> Value {
    json!({
        "rules": {
            "maxpercountry": "50", "hascards": "1", "afdie": "4", "teamgame": "0",
            "numtransfers": "1", "ddie": "6", "teamtransfer": "0", "boottime": "172800",
            "numreserves": "0", "fog": "0", "continuousattack": "1", "numattacks": "-1",
            "keeppossession": "0", "pretransfer": "0", "allowabandon": "0",
            "returntoplace": "0", "adie": "6", "cardscale": "4,6,8,10,12,15",
            "dfdie": "1", "baoplay": "0", "teamplaceunits": "0", "returntoattack": "0"
        },
        "map": {
            "numterritories": "3", "fillednumbers": "0", "fillmode": "1",
            "logox": "10", "logoy": "20", "logourl": "logo.png",
            "legendx": "500", "legendy": "400", "height": "600", "width": "800",
            "dispcnames": "1", "circlemode": "0",
            "_content": {
                "color": [{ "id": "1", "name": "red", "red": "255", "green": "0", "blue": "0" }],
                "territory": [
                    { "id": "1", "name": "North", "maxunits": "0", "x": "100", "y": "100", "textx": "5", "texty": "-5" },
                    { "id": "2", "name": "South", "maxunits": "0", "x": "100", "y": "300", "textx": "5", "texty": "-5" },
                    { "id": "3", "name": "East", "maxunits": "0", "x": "300", "y": "200", "textx": "5", "texty": "-5" }
                ]
            }
        },
        "board": {
            "boardid": board_id(game_id).to_string(),
            "height": "600",
            "width": "800",
            "_content": { "border": [
                { "a": "1", "b": "2" }, { "a": "2", "b": "1" },
                { "a": "2", "b": "3" }, { "a": "3", "b": "2" }
            ] }
        },
        "continents": { "_content": { "continent": [
            { "id": "1", "name": "West", "units": "2", "cids": "1,2" },
            { "id": "2", "name": "Rest", "units": "1", "cids": "3" }
        ] } }
    })
}

fn history_move(id: u64) -> Value {
    let codes = ["s", "p", "a", "f"];
    let code = codes[(id % codes.len() as u64) as usize];
    let mut item = json!({
        "id": id.to_string(),
        "t": (1_700_000_000 + id).to_string(),
        "a": code,
        "s": "0"
    });
    if code == "a" {
        item["ad"] = json!("6,3,2");
        item["dd"] = json!("5,4");
        item["fcid"] = json!("1");
        item["tcid"] = json!("2");
        item["ds"] = json!("-1");
    }
    item
}

fn history_content(game_id: u64, start: i64, num: u64) -> Value {
    let total = if game_id == EMPTY_HISTORY_GAME {
        0
    } else {
        HISTORY_TOTAL
    };
    let moves: Vec<Value> = if total == 0 {
        Vec::new()
    } else if start < 0 {
        vec![history_move(total - 1)]
    } else {
        let start = start as u64;
        (start..(start + num).min(total)).map(history_move).collect()
    };

    json!({ "movelog": { "total": total.to_string(), "m": moves } })
}

//! Game history log.
//!
//! The service returns at most one page of moves per call, so the log is
//! assembled by first asking for the total count and then paging through it.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{cached, namespace, WarfishClient};
use crate::error::Result;
use crate::models::convert::number;
use crate::models::wire::RawHistory;
use crate::models::HistoryItem;

const GET_HISTORY: &str = "warfish.tables.getHistory";

impl WarfishClient {
    /// Every move of the game, oldest first.
    pub async fn history_log(&self, game_id: u64) -> Result<Arc<Vec<HistoryItem>>> {
        match cached(&self.caches.history, namespace::HISTORY, &game_id.to_string()) {
            Some(history) => Ok(history),
            None => self.refresh_history(game_id).await,
        }
    }

    #[instrument(skip(self))]
    async fn refresh_history(&self, game_id: u64) -> Result<Arc<Vec<HistoryItem>>> {
        let gid = game_id.to_string();

        let head: RawHistory = self
            .fetch(
                GET_HISTORY,
                &[
                    ("gid", gid.clone()),
                    ("start", "-1".to_string()),
                    ("num", "1".to_string()),
                ],
            )
            .await?;
        let total: u64 = number("movelog.total", &head.movelog.total)?;

        let page_size = u64::from(self.config.history_page_size.max(1));
        let mut items = Vec::new();
        let mut start = 0;
        while start < total {
            debug!(game_id, start, page_size, total, "Fetching history page");
            let page: RawHistory = self
                .fetch(
                    GET_HISTORY,
                    &[
                        ("gid", gid.clone()),
                        ("start", start.to_string()),
                        ("num", page_size.to_string()),
                    ],
                )
                .await?;
            for raw in page.movelog.m {
                items.push(HistoryItem::try_from(raw)?);
            }
            start += page_size;
        }

        let history = Arc::new(items);
        self.caches.history.put(
            namespace::HISTORY,
            &gid,
            Arc::clone(&history),
            self.config.history_ttl(),
        );

        info!(game_id, moves = history.len(), "History log refreshed");
        Ok(history)
    }
}

//! Board image lookup.
//!
//! The image host does not say which format a board was uploaded in, so
//! each known extension is probed in turn.

use tracing::{debug, instrument};

use super::WarfishClient;
use crate::error::{Result, WarfishError};
use crate::models::MapImage;

/// Probe order: extension and the MIME type it is served as.
const IMAGE_FORMATS: [(&str, &str); 3] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("gif", "image/gif"),
];

impl WarfishClient {
    /// Downloads the board artwork for a game. Not cached.
    #[instrument(skip(self))]
    pub async fn map_image(&self, game_id: u64) -> Result<MapImage> {
        let board = self.board(game_id).await?;
        let base = self.config.image_url.trim_end_matches('/');

        for (extension, mime_type) in IMAGE_FORMATS {
            let url = format!("{}/b{}g0s0.{}", base, board.id, extension);
            let response = self.http.get(&url).send().await?;

            if response.status().is_success() {
                let data = response.bytes().await?.to_vec();
                return Ok(MapImage {
                    width: board.width,
                    height: board.height,
                    mime_type,
                    data,
                });
            }

            debug!(url = %url, status = %response.status(), "Map image format not available");
        }

        Err(WarfishError::MapImageNotFound(board.id))
    }
}

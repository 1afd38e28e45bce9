// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::RoomViewConfig;
use crate::error::{ConfigError, FetchFailure};
use crate::models::room::RoomCollection;

/// Where the room view reads its rooms from
#[async_trait]
pub trait RoomSource: Debug + Send + Sync {
    async fn fetch_rooms(&self) -> Result<RoomCollection, FetchFailure>;
}

/// Reads the rooms from the backend api with a single `GET {base_url}/api/rooms/`
#[derive(Debug, Clone)]
pub struct HttpRoomSource {
    client: Client,
    url: String,
}

impl HttpRoomSource {
    pub fn new(config: &RoomViewConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.rooms_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RoomSource for HttpRoomSource {
    async fn fetch_rooms(&self) -> Result<RoomCollection, FetchFailure> {
        tracing::debug!(url = %self.url, "fetching rooms");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FetchFailure::new(&self.url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::new(
                &self.url,
                format_args!("unexpected status {status}"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchFailure::new(&self.url, err))?;

        let rooms: RoomCollection = serde_json::from_slice(&body).map_err(|err| {
            FetchFailure::new(&self.url, format_args!("malformed rooms payload: {err}"))
        })?;

        tracing::debug!(url = %self.url, count = rooms.len(), "rooms fetched");
        Ok(rooms)
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

/// Any failure while fetching the room collection: the request could not be sent, the server
/// answered with a non-success status, or the payload was not a list of rooms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error fetching rooms from {url}: {reason}")]
pub struct FetchFailure {
    url: String,
    reason: String,
}

impl FetchFailure {
    pub fn new(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid api base url `{value}`: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid request timeout `{0}`, expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("could not build the http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

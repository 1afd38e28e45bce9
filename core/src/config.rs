// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use roomview_utils::env::non_empty_env;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

const API_BASE_URL_KEY: &str = "ROOMVIEW_API_BASE_URL";
const REQUEST_TIMEOUT_KEY: &str = "ROOMVIEW_REQUEST_TIMEOUT_SECS";

/// Settings injected into the room view on construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomViewConfig {
    api_base_url: String,
    request_timeout: Option<Duration>,
}

impl Default for RoomViewConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl RoomViewConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: validate_base_url(api_base_url)?,
            request_timeout: None,
        })
    }

    /// Loads the `.env` file (if any) and reads the settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(non_empty_env)
    }

    /// Builds the settings from a key lookup, unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(API_BASE_URL_KEY) {
            Some(base_url) => Self::new(&base_url)?,
            None => Self::default(),
        };

        if let Some(timeout) = lookup(REQUEST_TIMEOUT_KEY) {
            let seconds = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|seconds| *seconds > 0)
                .ok_or(ConfigError::InvalidTimeout(timeout))?;
            config.request_timeout = Some(Duration::from_secs(seconds));
        }

        Ok(config)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Url of the room collection endpoint
    pub fn rooms_url(&self) -> String {
        format!("{}/api/rooms/", self.api_base_url)
    }
}

/// Checks the base url is an absolute http(s) url and strips its trailing slashes
fn validate_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(trimmed.to_string())
}

use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

/// Base URL of the public breach API.
pub const DEFAULT_BASE_URL: &str = "https://haveibeenpwned.com/api/v2/";

/// User agent sent with every request. The service rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "pwned-rs-client";

/// Settings applied once when a [`PwnedClient`](crate::PwnedClient) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base that every relative request path is resolved against.
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request deadline. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn user_agent_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.user_agent)
            .map_err(|_| Error::InvalidUserAgent { user_agent: self.user_agent.clone() })
    }
}

/// Parses a base URL and makes sure its path ends with `/`.
///
/// Without the trailing slash, reference resolution would replace the last
/// path segment (`/api/v2` joined with `breaches` gives `/api/breaches`).
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|source| Error::InvalidBaseUrl { url: raw.to_string(), source: Some(source) })?;

    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl { url: raw.to_string(), source: None });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

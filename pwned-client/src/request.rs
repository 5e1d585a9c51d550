//! Request construction against the configured base URL.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::client::PwnedClient;
use crate::error::{Error, Result};

/// Placeholder body for requests that carry none.
pub const NO_BODY: Option<&()> = None;

/// A fully resolved request, ready for [`PwnedClient::execute`].
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl PwnedClient {
    /// Builds a request for `path`, resolved against the base URL.
    ///
    /// `path` is a relative reference and may carry a query string. It is
    /// resolved as given; percent-encoding untrusted segments is up to the
    /// caller. A present `body` is sent as JSON.
    pub fn build<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<PreparedRequest>
    where
        T: Serialize + ?Sized,
    {
        let url = self
            .base_url()
            .join(path)
            .map_err(|source| Error::MalformedPath { path: path.to_string(), source })?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent().clone());

        let body = match body {
            Some(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_string(value)?)
            }
            None => None,
        };

        Ok(PreparedRequest { method, url, headers, body })
    }
}

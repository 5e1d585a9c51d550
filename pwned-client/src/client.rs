use reqwest::blocking::Client;
use reqwest::header::HeaderValue;
use reqwest::{Method, Url};

use crate::config::{ClientConfig, parse_base_url};
use crate::error::{Error, Result};
use crate::hash::{sha1_hex, split_hash};
use crate::range::find_suffix;
use crate::request::NO_BODY;

/// Blocking client for the breach API.
///
/// Cloning is cheap; clones share the underlying connection pool and can be
/// used from several threads at once.
#[derive(Debug, Clone)]
pub struct PwnedClient {
    http: Client,
    base_url: Url,
    user_agent: HeaderValue,
}

impl PwnedClient {
    /// Creates a client with [`ClientConfig::default`].
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let user_agent = config.user_agent_header()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { http: builder.build()?, base_url, user_agent })
    }

    /// Replaces the HTTP client, e.g. one with custom proxy or pool settings.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Checks whether `secret` appears in the breach corpus.
    ///
    /// Only the first 5 hex characters of the secret's SHA-1 digest are sent;
    /// the rest is matched locally against the returned candidates.
    pub fn check_compromised(&self, secret: &str) -> Result<bool> {
        self.compromised_count(secret).map(|count| count.is_some())
    }

    /// Like [`check_compromised`](Self::check_compromised), but returns how
    /// often the secret occurs in the corpus.
    pub fn compromised_count(&self, secret: &str) -> Result<Option<i64>> {
        if secret.is_empty() {
            return Err(Error::InvalidInput);
        }

        let digest = sha1_hex(secret);
        let (prefix, suffix) = split_hash(&digest);

        let request = self.build(Method::GET, &format!("range/{prefix}"), NO_BODY)?;
        let lines = self.execute(request)?;

        find_suffix(lines.iter().map(String::as_str), suffix)
    }

    /// Lists every breach known to the service, one raw line per element.
    pub fn breaches(&self) -> Result<Vec<String>> {
        let request = self.build(Method::GET, "breaches", NO_BODY)?;
        self.execute(request)
    }

    /// Lists breaches affecting `domain`, one raw line per element.
    ///
    /// `domain` is placed into the query string as given.
    pub fn breaches_by_domain(&self, domain: &str) -> Result<Vec<String>> {
        let request = self.build(Method::GET, &format!("breaches?domain={domain}"), NO_BODY)?;
        self.execute(request)
    }
}

use std::num::ParseIntError;

/// Errors returned by [`PwnedClient`](crate::PwnedClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("secret must not be empty")]
    InvalidInput,

    #[error("invalid base URL '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    #[error("invalid user agent '{user_agent}'")]
    InvalidUserAgent { user_agent: String },

    #[error("malformed request path '{path}': {source}")]
    MalformedPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("invalid occurrence count in range line '{line}': {source}")]
    Parse {
        line: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// Returns true when the server answered 404.
    ///
    /// The service uses 404 on some endpoints to report an empty result. The
    /// client still surfaces it as [`Error::UnexpectedStatus`]; this lets
    /// callers tell the two apart without matching on the status code.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UnexpectedStatus { status: 404 })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

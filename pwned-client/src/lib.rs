//! Blocking client for the [Have I Been Pwned](https://haveibeenpwned.com) API.
//!
//! Passwords are checked with the k-anonymity range protocol: the password is
//! hashed with SHA-1, only the first 5 hex characters of the digest are sent,
//! and the server answers with every `SUFFIX:COUNT` pair sharing that prefix.
//! The remaining 35 characters are matched locally, so neither the password
//! nor its full hash ever leaves the process.
//!
//! Breach listings are passed through as raw response lines.
//!
//! # Usage
//!
//! ```no_run
//! use pwned_client::PwnedClient;
//!
//! # fn main() -> pwned_client::Result<()> {
//! let client = PwnedClient::new()?;
//! if client.check_compromised("password123")? {
//!     println!("pick another password");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call is a single request. Nothing is retried or cached, and any
//! status other than `200 OK` is returned as [`Error::UnexpectedStatus`].

pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod range;
pub mod request;
pub mod transport;

pub use client::PwnedClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use hash::{HASH_HEX_LEN, PREFIX_LEN, SUFFIX_LEN, sha1_hex, split_hash};
pub use range::{RangeEntry, find_suffix};
pub use request::{NO_BODY, PreparedRequest};
pub use transport::split_lines;

/// Re-exported so callers can build requests and swap HTTP clients without
/// depending on `reqwest` directly.
pub use reqwest::Method;
pub use reqwest::blocking::Client as HttpClient;

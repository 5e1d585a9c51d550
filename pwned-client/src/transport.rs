//! Executes prepared requests and turns response bodies into lines.

use reqwest::StatusCode;

use crate::client::PwnedClient;
use crate::error::{Error, Result};
use crate::request::PreparedRequest;

impl PwnedClient {
    /// Sends `request` and returns the response body split into lines.
    ///
    /// Anything but `200 OK` fails with [`Error::UnexpectedStatus`] without
    /// reading the body. A body that is not valid UTF-8 fails with
    /// [`Error::Decode`] rather than being altered. The response is owned here
    /// and dropped on every return path, which hands the connection back to
    /// the pool or closes it.
    #[tracing::instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub fn execute(&self, request: PreparedRequest) -> Result<Vec<String>> {
        let PreparedRequest { method, url, headers, body } = request;

        let mut builder = self.http().request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus { status: status.as_u16() });
        }

        let body = decode_body(response.bytes()?.to_vec())?;
        let lines = split_lines(&body);
        tracing::debug!(bytes = body.len(), lines = lines.len(), "read response body");

        Ok(lines)
    }
}

/// Decodes a response body as UTF-8 without replacing invalid bytes.
pub fn decode_body(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Normalizes CRLF to LF and splits on LF.
///
/// Empty elements are kept, including the one after a trailing newline.
pub fn split_lines(body: &str) -> Vec<String> {
    body.replace("\r\n", "\n").split('\n').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_crlf_keeps_trailing_empty() {
        assert_eq!(split_lines("ABC\r\nDEF\r\n"), vec!["ABC", "DEF", ""]);
    }

    #[test]
    fn test_split_mixed_endings() {
        assert_eq!(split_lines("A\nB\r\n\nC"), vec!["A", "B", "", "C"]);
    }

    #[test]
    fn test_split_lone_carriage_return_is_kept() {
        assert_eq!(split_lines("A\rB\n"), vec!["A\rB", ""]);
    }

    #[test]
    fn test_decode_body_rejects_invalid_utf8() {
        assert_eq!(decode_body(b"ABC\r\n".to_vec()).unwrap(), "ABC\r\n");
        assert_eq!(decode_body("caf\u{e9}".as_bytes().to_vec()).unwrap(), "caf\u{e9}");

        let err = decode_body(vec![b'A', 0xFF, b'B']).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn test_split_empty_body() {
        assert_eq!(split_lines(""), vec![""]);
    }
}

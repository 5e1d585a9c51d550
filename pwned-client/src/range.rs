//! Parsing of range lookup responses.
//!
//! Each line of a range response has the form `SUFFIX:COUNT`, where SUFFIX is
//! the 35 hex characters of a SHA-1 digest following the queried 5 character
//! prefix and COUNT is how often that digest occurs in the breach corpus.

use crate::error::{Error, Result};
use crate::hash::SUFFIX_LEN;

/// Shortest line that can hold a full suffix and its separator.
pub const MIN_LINE_LEN: usize = SUFFIX_LEN + 1;

/// A borrowed view of one `SUFFIX:COUNT` line.
///
/// The count is kept as raw bytes and only parsed through
/// [`RangeEntry::count`], so lines that never match are never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<'a> {
    line: &'a str,
    suffix: &'a str,
    count: &'a [u8],
}

impl<'a> RangeEntry<'a> {
    /// Splits `line` at the fixed suffix offset.
    ///
    /// Returns `None` for lines too short to hold a suffix and separator,
    /// and for lines whose first 35 bytes are not whole characters (those can
    /// never equal a hex suffix). The separator byte is not checked; the count
    /// is everything from byte 36 on.
    pub fn parse(line: &'a str) -> Option<Self> {
        if line.len() < MIN_LINE_LEN {
            return None;
        }

        let suffix = line.get(..SUFFIX_LEN)?;
        let count = &line.as_bytes()[MIN_LINE_LEN..];

        Some(Self { line, suffix, count })
    }

    #[inline]
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    /// Parses the occurrence count as a signed 64-bit base-10 integer.
    ///
    /// A count that starts inside a multibyte separator is not valid UTF-8 on
    /// its own; it decodes with a replacement character and fails to parse.
    pub fn count(&self) -> Result<i64> {
        String::from_utf8_lossy(self.count)
            .parse()
            .map_err(|source| Error::Parse { line: self.line.to_string(), source })
    }
}

/// Scans range response lines for `suffix`.
///
/// Stops at the first matching line and returns its count. Counts of lines
/// after the match are never parsed.
pub fn find_suffix<'a, I>(lines: I, suffix: &str) -> Result<Option<i64>>
where
    I: IntoIterator<Item = &'a str>,
{
    for (index, line) in lines.into_iter().enumerate() {
        let Some(entry) = RangeEntry::parse(line) else {
            continue;
        };

        if entry.suffix() == suffix {
            tracing::trace!(index, "range entry matched");
            return entry.count().map(Some);
        }
    }

    Ok(None)
}

use std::convert::Infallible;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::range::RangeError;

const BYTES_PREFIX: &str = "bytes=";

/// A single parsed `Range` request header.
///
/// Parsing is best-effort and never fails: garbage input degrades to a range
/// starting at byte 0. `end` is inclusive and `None` means "to the end of the
/// resource".
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: u64,
    pub end: Option<u64>, // inclusive
    pub raw: String,
}

impl ByteRange {
    /// Parses the value of a `Range` header such as `bytes=0-499` or `bytes=500-`.
    ///
    /// The `bytes=` prefix is optional. The remainder is split on `-` and only
    /// the first two segments are looked at. An unparsable start becomes 0. A
    /// non-empty but unparsable end becomes `Some(0)`, which can produce an
    /// inverted range; callers that slice with [`ByteRange::try_apply`] get an
    /// error for it. Digit strings too large for `u64` saturate to `u64::MAX`.
    pub fn parse(header: &str) -> Self {
        let range = header.strip_prefix(BYTES_PREFIX).unwrap_or(header);
        let mut parts = range.split('-');

        let start = parts.next().map(parse_offset).unwrap_or_default();

        let end = match parts.next() {
            None | Some("") => None,
            Some(v) => Some(parse_offset(v)),
        };

        Self {
            start,
            end,
            raw: header.to_string(),
        }
    }

    /// Formats the `Content-Range` response header value for this range.
    ///
    /// Open-ended ranges yield an empty string: the caller has to settle the
    /// real end first (see [`ByteRange::resolve`]). Nothing is checked against
    /// `file_length`.
    pub fn to_header_value(&self, file_length: u64) -> String {
        match self.end {
            Some(end) => format!("bytes {}-{}/{}", self.start, end, file_length),
            None => String::new(),
        }
    }

    /// Returns the requested slice of `data`.
    ///
    /// An explicit end past the buffer is clamped to the buffer length. The
    /// start is never clamped.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of `data`, or if `start` is greater
    /// than the (clamped) exclusive end.
    pub fn apply<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let start = to_index(self.start);

        match self.end {
            None => &data[start..],
            Some(end) => &data[start..self.exclusive_end(end, data.len())],
        }
    }

    /// Same selection as [`ByteRange::apply`], reporting the out-of-bounds cases
    /// as errors instead of panicking.
    pub fn try_apply<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], RangeError> {
        let start = to_index(self.start);
        let len = data.len();

        if start > len {
            return Err(RangeError::StartOutOfBounds {
                start: self.start,
                len: len as u64,
            });
        }

        let end = match self.end {
            None => len,
            Some(end) => self.exclusive_end(end, len),
        };

        if start > end {
            return Err(RangeError::InvertedBounds {
                start: self.start,
                end: self.end.unwrap_or_default(),
            });
        }

        Ok(&data[start..end])
    }

    /// Returns a copy whose `end` is the last byte [`ByteRange::apply`] would
    /// serve from a resource of `file_length` bytes.
    pub fn resolve(&self, file_length: u64) -> Self {
        let last = file_length.saturating_sub(1);
        let end = self.end.map_or(last, |end| end.min(last));

        Self {
            start: self.start,
            end: Some(end),
            raw: self.raw.clone(),
        }
    }

    /// True when no end was given, i.e. the range runs to the end of the resource.
    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    fn exclusive_end(&self, end: u64, len: usize) -> usize {
        to_index(end.saturating_add(1)).min(len)
    }
}

fn parse_offset(value: &str) -> u64 {
    match value.parse::<u64>() {
        Ok(offset) => offset,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

// Offsets that do not fit in usize cannot address any in-memory buffer, so
// they saturate and fail the bounds checks.
fn to_index(offset: u64) -> usize {
    usize::try_from(offset).unwrap_or(usize::MAX)
}

impl FromStr for ByteRange {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ByteRange {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

use crate::range::RangeError;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("body of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("range not satisfiable for a {len} byte body")]
    RangeNotSatisfiable {
        len: u64,
        #[source]
        source: Option<RangeError>,
    },
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RangeNotSatisfiable { .. } => StatusCode::RANGE_NOT_SATISFIABLE,
        }
    }
}

/// A fully buffered response. `body` may share its allocation with the
/// buffer that was passed in.
#[derive(Debug, Clone)]
pub struct RangeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

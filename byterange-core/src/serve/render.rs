use bytes::Bytes;
use http::StatusCode;
use tracing::{debug, warn};

use crate::config::ServeConfig;
use crate::range::ByteRange;
use crate::serve::headers::HeaderBuilder;
use crate::serve::{RangeResponse, ServeError};

/// Renders an in-memory body, honoring the `Range` request header if there is one.
pub fn render_bytes(
    data: Bytes,
    range: Option<&str>,
    config: &ServeConfig,
) -> Result<RangeResponse, ServeError> {
    let len = data.len() as u64;

    // Guard against memory exhaustion.
    if len > config.max_body_size {
        return Err(ServeError::TooLarge {
            size: len,
            limit: config.max_body_size,
        });
    }

    let mut headers = HeaderBuilder::default();
    headers.accept_ranges(config.enable_ranges);

    let range = match range {
        Some(header) if config.enable_ranges => ByteRange::parse(header),
        _ => {
            headers.content_length(data.len());
            return Ok(RangeResponse {
                status: StatusCode::OK,
                headers: headers.build(),
                body: data,
            });
        }
    };

    let body = match range.try_apply(&data) {
        Ok(slice) if !slice.is_empty() => data.slice_ref(slice),
        Ok(_) => {
            warn!(range = %range, len, "empty range selection");
            return Err(ServeError::RangeNotSatisfiable { len, source: None });
        }
        Err(err) => {
            warn!(range = %range, len, error = %err, "unsatisfiable range");
            return Err(ServeError::RangeNotSatisfiable {
                len,
                source: Some(err),
            });
        }
    };

    // The header has to describe what was actually served, so open ends are
    // filled in and explicit ends are clamped.
    let served = range.resolve(len);

    debug!(
        range = %range,
        start = served.start,
        end = served.end,
        len,
        "serving partial content"
    );

    headers.content_range(&served.to_header_value(len));
    headers.content_length(body.len());

    Ok(RangeResponse {
        status: StatusCode::PARTIAL_CONTENT,
        headers: headers.build(),
        body,
    })
}

use bytes::Bytes;

use crate::config::ServeConfig;
use crate::serve::headers::HeaderBuilder;
use crate::serve::{RangeResponse, ServeError, render_bytes};

/// Serves `data` for a request carrying the given `Range` header value.
///
/// Never fails: serving errors become empty 413/416 responses.
pub fn handle_range_request(
    data: Bytes,
    range: Option<&str>,
    config: &ServeConfig,
) -> RangeResponse {
    render_bytes(data, range, config).unwrap_or_else(|e| error_response(&e, config))
}

fn error_response(err: &ServeError, config: &ServeConfig) -> RangeResponse {
    let mut headers = HeaderBuilder::default();
    headers.accept_ranges(config.enable_ranges);
    headers.content_length(0);

    if let ServeError::RangeNotSatisfiable { len, .. } = err {
        headers.unsatisfied_range(*len);
    }

    RangeResponse {
        status: err.status(),
        headers: headers.build(),
        body: Bytes::new(),
    }
}

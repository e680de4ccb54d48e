use http::{HeaderMap, HeaderName, HeaderValue, header};

#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Inserts `value`, or removes the header when `value` is empty or not a valid
    /// header value. This is how an empty `ByteRange::to_header_value` result keeps
    /// `Content-Range` off the response.
    pub(crate) fn insert(&mut self, header_name: HeaderName, value: &str) {
        let header_value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
        if header_value.is_empty() {
            self.headers.remove(header_name);
        } else {
            self.headers.insert(header_name, header_value);
        }
    }

    pub(crate) fn accept_ranges(&mut self, enabled: bool) {
        self.insert(header::ACCEPT_RANGES, if enabled { "bytes" } else { "none" });
    }

    pub(crate) fn content_length(&mut self, len: usize) {
        self.insert(header::CONTENT_LENGTH, &len.to_string());
    }

    pub(crate) fn content_range(&mut self, value: &str) {
        self.insert(header::CONTENT_RANGE, value);
    }

    /// `Content-Range: bytes */{len}` as sent with 416 responses.
    pub(crate) fn unsatisfied_range(&mut self, len: u64) {
        self.insert(header::CONTENT_RANGE, &format!("bytes */{len}"));
    }

    pub(crate) fn build(self) -> HeaderMap {
        self.headers
    }
}

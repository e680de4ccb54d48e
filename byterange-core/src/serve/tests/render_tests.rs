use crate::config::ServeConfig;
use crate::range::RangeError;
use crate::serve::{ServeError, render_bytes};
use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use pretty_assertions::assert_eq;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
fn body() -> Bytes {
    Bytes::from((0..1000u32).map(|i| (i % 251) as u8).collect::<Vec<u8>>())
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).map(|v| v.to_str().unwrap())
}

//-----------------------------------------------------------------------------
// Full responses
//-----------------------------------------------------------------------------
#[test]
fn no_range_serves_full_body() {
    let data = body();

    let res = render_bytes(data.clone(), None, &ServeConfig::default()).unwrap();

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, data);
    assert_eq!(header_str(&res.headers, header::CONTENT_LENGTH), Some("1000"));
    assert_eq!(header_str(&res.headers, header::ACCEPT_RANGES), Some("bytes"));
    assert_eq!(header_str(&res.headers, header::CONTENT_RANGE), None);
}

#[test]
fn disabled_ranges_serve_full_body() {
    let cfg = ServeConfig {
        enable_ranges: false,
        ..ServeConfig::default()
    };

    let res = render_bytes(body(), Some("bytes=0-9"), &cfg).unwrap();

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.len(), 1000);
    assert_eq!(header_str(&res.headers, header::ACCEPT_RANGES), Some("none"));
}

#[test]
fn oversized_body_is_rejected() {
    let cfg = ServeConfig {
        max_body_size: 999,
        ..ServeConfig::default()
    };

    let err = render_bytes(body(), None, &cfg).unwrap_err();

    assert!(matches!(
        err,
        ServeError::TooLarge {
            size: 1000,
            limit: 999
        }
    ));
    assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

//-----------------------------------------------------------------------------
// Partial responses
//-----------------------------------------------------------------------------
#[test]
fn closed_range_is_partial_content() {
    let data = body();

    let res = render_bytes(data.clone(), Some("bytes=0-499"), &ServeConfig::default()).unwrap();

    assert_eq!(res.status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(res.body, data.slice(0..500));
    assert_eq!(
        header_str(&res.headers, header::CONTENT_RANGE),
        Some("bytes 0-499/1000")
    );
    assert_eq!(header_str(&res.headers, header::CONTENT_LENGTH), Some("500"));
}

#[test]
fn open_ended_range_reports_resolved_end() {
    let data = body();

    let res = render_bytes(data.clone(), Some("bytes=500-"), &ServeConfig::default()).unwrap();

    assert_eq!(res.status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(res.body, data.slice(500..));
    assert_eq!(
        header_str(&res.headers, header::CONTENT_RANGE),
        Some("bytes 500-999/1000")
    );
}

#[test]
fn end_past_body_is_clamped_in_header() {
    let res = render_bytes(body(), Some("bytes=990-5000"), &ServeConfig::default()).unwrap();

    assert_eq!(res.body.len(), 10);
    assert_eq!(
        header_str(&res.headers, header::CONTENT_RANGE),
        Some("bytes 990-999/1000")
    );
}

#[test]
fn empty_range_header_serves_everything_as_partial() {
    let res = render_bytes(body(), Some("bytes="), &ServeConfig::default()).unwrap();

    assert_eq!(res.status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(res.body.len(), 1000);
    assert_eq!(
        header_str(&res.headers, header::CONTENT_RANGE),
        Some("bytes 0-999/1000")
    );
}

//-----------------------------------------------------------------------------
// Unsatisfiable ranges
//-----------------------------------------------------------------------------
#[test]
fn start_past_body_is_not_satisfiable() {
    let err = render_bytes(body(), Some("bytes=1010-"), &ServeConfig::default()).unwrap_err();

    match err {
        ServeError::RangeNotSatisfiable { len, source } => {
            assert_eq!(len, 1000);
            assert_eq!(
                source,
                Some(RangeError::StartOutOfBounds {
                    start: 1010,
                    len: 1000
                })
            );
        }
        other => panic!("Expected RangeNotSatisfiable, got {:?}", other),
    }
}

#[test]
fn start_at_body_length_is_not_satisfiable() {
    let err = render_bytes(body(), Some("bytes=1000-"), &ServeConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ServeError::RangeNotSatisfiable { len: 1000, source: None }
    ));
}

#[test]
fn non_numeric_end_is_not_satisfiable() {
    let err = render_bytes(body(), Some("bytes=10-abc"), &ServeConfig::default()).unwrap_err();

    assert_eq!(err.status(), StatusCode::RANGE_NOT_SATISFIABLE);
}

#[test]
fn empty_body_is_not_satisfiable() {
    let err = render_bytes(Bytes::new(), Some("bytes=0-"), &ServeConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ServeError::RangeNotSatisfiable { len: 0, .. }
    ));
}

#[test]
fn overflowing_start_is_not_satisfiable() {
    let err = render_bytes(
        body(),
        Some("bytes=99999999999999999999-"),
        &ServeConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ServeError::RangeNotSatisfiable {
            len: 1000,
            source: Some(RangeError::StartOutOfBounds { start: u64::MAX, .. })
        }
    ));
}

#[test]
fn overflowing_end_serves_to_end_of_body() {
    let res = render_bytes(
        body(),
        Some("bytes=900-99999999999999999999"),
        &ServeConfig::default(),
    )
    .unwrap();

    assert_eq!(res.status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(res.body.len(), 100);
    assert_eq!(
        header_str(&res.headers, header::CONTENT_RANGE),
        Some("bytes 900-999/1000")
    );
}

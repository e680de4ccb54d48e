//! Single `Range` header parsing and partial-content rendering for in-memory bodies.

pub mod config;
pub mod logging;
pub mod range;
pub mod serve;

pub use range::{ByteRange, RangeError};

mod byte_range;
mod error;

pub use byte_range::*;
pub use error::*;

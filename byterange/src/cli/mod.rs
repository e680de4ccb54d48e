pub mod content_range;
pub mod slice;

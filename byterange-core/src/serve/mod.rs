mod handler;
mod headers;
mod render;
mod response;
#[cfg(test)]
mod tests;

pub use handler::handle_range_request;
pub use render::render_bytes;
pub use response::{RangeResponse, ServeError};

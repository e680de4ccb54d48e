mod error;
mod serve;

pub use error::ConfigError;
pub use serve::ServeConfig;

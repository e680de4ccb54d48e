use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigError;

/// Options for serving in-memory bodies.
///
/// ```text
/// enable_ranges = true
/// max_body_size = 10485760
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// When false, `Range` headers are ignored and the full body is served.
    pub enable_ranges: bool,
    pub max_body_size: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            enable_ranges: true,
            max_body_size: 10 * 1024 * 1024, // 10 MiB
        }
    }
}

impl ServeConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
    }
}

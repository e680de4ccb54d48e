use byterange_core::config::ServeConfig;
use bytes::Bytes;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> Bytes {
    let path = fixture_path(file);
    let data = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));

    Bytes::from(data)
}

pub fn load_config(file: &str) -> ServeConfig {
    ServeConfig::from_file(&fixture_path(file))
        .unwrap_or_else(|e| panic!("failed to load config {file}: {e}"))
}

mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_config, load_fixture};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};

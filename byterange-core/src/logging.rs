use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for log level filtering (defaults to "info" if not set)
/// - `LogFormat::Json` flattens event fields for cleaner structured output
/// - Logs go to stderr so a response body written to stdout stays intact
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.init(),
    }
}

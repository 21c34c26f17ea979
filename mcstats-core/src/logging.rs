use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the diagnostic stream.
///
/// Diagnostics (which file is being replayed, session open/close markers,
/// skipped anomalies) always go to stderr so stdout only ever carries the
/// report itself.
///
/// - `RUST_LOG` takes precedence when set
/// - otherwise the level is `info`, or `warn` when `quiet` is requested
pub fn init_logging(format: LogFormat, quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

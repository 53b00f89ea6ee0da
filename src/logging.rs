//! Tracing subscriber setup.
//!
//! The filter is chosen with priority CLI > `RUST_LOG` > default, and the
//! output format comes from `[logging] format` in the config file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter directive: CLI argument, then environment, then default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global tracing subscriber.
pub fn init(filter: &str, format: LogFormat) {
    let fmt_layer = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(fmt_layer)
        .init();
}

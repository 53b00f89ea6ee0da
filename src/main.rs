//! healthz-server: an HTTP liveness responder.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration from a TOML file, initializes tracing, builds the Axum router
//! and starts the HTTP server.

use clap::Parser;

use healthz_server::config::{AppConfig, DEFAULT_CONFIG_PATH, HEALTHZ_PATH};
use healthz_server::{create_router, http, logging};

/// healthz-server: answers liveness probes on /healthz
#[derive(Parser, Debug)]
#[command(name = "healthz-server", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "healthz_server=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is loaded first since it selects the log format
    let config = AppConfig::load(&args.config)?;

    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.log_format()?);

    tracing::info!(
        path = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    tracing::info!(path = HEALTHZ_PATH, "Liveness route registered");

    http::start_server(app, &config).await?;

    Ok(())
}

//! healthz-server: a minimal HTTP liveness responder.
//!
//! Answers `GET /healthz` with `200 healthy` so orchestrators and load
//! balancers can tell the process is running and responsive.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use routes::create_router;

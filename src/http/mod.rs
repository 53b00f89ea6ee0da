//! HTTP server module.
//!
//! Serves plain HTTP; TLS is expected to be terminated by the fronting proxy
//! or load balancer. The server shuts down gracefully on SIGTERM/SIGINT,
//! draining in-flight requests for the configured grace period.

mod server;
mod shutdown;

pub use server::{serve, start_server, start_server_with_shutdown, ServerError};
pub use shutdown::shutdown_signal;

//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use crate::config::HEALTHZ_BODY;

/// Liveness handler.
///
/// Returns a fixed plaintext "healthy" body. This only checks that the
/// process can respond to HTTP; it never inspects downstream dependencies.
pub async fn healthz() -> &'static str {
    HEALTHZ_BODY
}

// SPDX-License-Identifier: Apache-2.0

//! Web front end for issuelens.
//!
//! Serves an HTML form at `/`, its form handler at `/analyze`, a JSON API at
//! `/api/analyze`, and a credential health check at `/health`. Every request
//! runs the issuelens-core pipeline independently against shared read-only
//! configuration.

mod error;
mod page;
mod server;

pub use error::{ApiError, ErrorBody, status_for};
pub use page::escape_html;
pub use server::{AnalyzeRequest, AppState, CredentialStatus, HealthResponse, build_router};

use std::net::SocketAddr;

use issuelens_core::{AppConfig, Credentials};
use tokio::net::TcpListener;

/// Formats a bind address, bracketing IPv6 hosts.
fn bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let addr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    };
    Ok(addr.parse()?)
}

/// Run the web server until Ctrl+C.
///
/// Binds `config.web.host:config.web.port` and shuts down gracefully.
pub async fn run_http(config: AppConfig, credentials: Credentials) -> anyhow::Result<()> {
    let addr = bind_addr(&config.web.host, config.web.port)?;

    if !credentials.has_ai_api_key() {
        tracing::warn!(
            "{} is not set; analysis requests will fail with a configuration error",
            issuelens_core::auth::AI_API_KEY_ENV
        );
    }

    let router = build_router(AppState::new(config, credentials));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_ipv4() {
        assert_eq!(
            bind_addr("127.0.0.1", 5000).unwrap().to_string(),
            "127.0.0.1:5000"
        );
    }

    #[test]
    fn bind_addr_ipv6_is_bracketed() {
        assert_eq!(bind_addr("::1", 8080).unwrap().to_string(), "[::1]:8080");
    }

    #[test]
    fn bind_addr_rejects_garbage() {
        assert!(bind_addr("not a host", 1).is_err());
    }
}

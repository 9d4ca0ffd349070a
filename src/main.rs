//! Quote Proxy
//!
//! A small HTTP service built with Tokio and Axum that fronts a third-party
//! quote API.
//!
//! # Architecture Overview
//!
//! ```text
//! Client ── GET /quotes?author=&keyword=&format=&all= ──▶ http::server
//!                │
//!                ▼
//!        upstream::client  (fetch full collection, bounded timeout)
//!                │
//!                ▼
//!        quotes::filter    (case-insensitive substring, AND semantics)
//!                │
//!                ▼
//!        quotes::select    (uniform random pick)  or  full filtered list
//!                │
//!                ▼
//!        JSON object / JSON array / plain-text "<text> - <author>"
//!
//! Cross-cutting: config (TOML + validation), observability (tracing,
//! optional Prometheus exporter), request IDs (UUID v4).
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use quote_proxy::config::{load_config, QuoteProxyConfig};
use quote_proxy::http::HttpServer;
use quote_proxy::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config file path is the optional first argument; defaults are complete.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => QuoteProxyConfig::default(),
    };

    logging::init_logging(&config.observability.log_filter);

    tracing::info!("quote-proxy v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_url = %config.upstream.url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let server = HttpServer::new(&config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; request ID attached by middleware
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;

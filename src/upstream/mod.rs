//! Upstream quote service integration.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (GET upstream endpoint, bounded timeout)
//!     → decode wire records `[{q, a}, ...]`
//!     → Vec<Quote> handed back to the handler
//! ```
//!
//! # Design Decisions
//! - One outbound call per inbound request; no caching, no retries
//! - Wire field names (`q`, `a`) are an upstream contract; any deviation
//!   surfaces as a decode error, not a panic

pub mod client;

pub use client::{UpstreamClient, UpstreamError};

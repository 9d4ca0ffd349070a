//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound GET /quotes?author=&keyword=&format=&all=
//!     → server.rs (Axum setup, middleware: timeout, trace, request ID)
//!     → quotes.rs (fetch upstream, filter, select or list, render)
//!     → JSON object, JSON array, or plain-text line
//! ```

pub mod quotes;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

//! Quote Proxy Library
//!
//! Fronts a third-party quote API: fetches the full collection per request,
//! applies optional author/keyword filtering, and renders a random quote,
//! the full filtered list, or a plain-text line.

pub mod config;
pub mod http;
pub mod observability;
pub mod quotes;
pub mod upstream;

pub use config::QuoteProxyConfig;
pub use http::HttpServer;
pub use quotes::Quote;

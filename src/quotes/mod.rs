//! Quote domain types and request-scoped transforms.
//!
//! # Data Flow
//! ```text
//! upstream payload (Vec<Quote>)
//!     → filter.rs (author/keyword narrowing, AND semantics)
//!     → select.rs (uniform random pick, injected RNG)
//!     → handler renders JSON object, JSON array, or plain text
//! ```
//!
//! # Design Decisions
//! - Quotes live only for the duration of one request; nothing is cached
//! - Selection takes the RNG as a parameter so handlers stay testable

pub mod filter;
pub mod select;
pub mod types;

pub use filter::QuoteFilter;
pub use select::select_random;
pub use types::Quote;

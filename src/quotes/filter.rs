//! Author/keyword filtering over a fetched quote collection.
//!
//! # Responsibilities
//! - Match the author field (case-insensitive substring)
//! - Match the quote text (case-insensitive substring)
//! - Combine criteria with AND semantics
//!
//! # Design Decisions
//! - Criteria are lowercased once at construction
//! - Absent or empty criterion = always matches (wildcard)
//! - Literal substring semantics: no trimming, no multi-value splitting

use crate::quotes::types::Quote;

/// Filter criteria derived from request query parameters.
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    author: Option<String>,
    keyword: Option<String>,
}

impl QuoteFilter {
    /// Build a filter from optional query values.
    /// Values are normalized to lowercase; empty strings count as absent.
    pub fn new(author: Option<&str>, keyword: Option<&str>) -> Self {
        Self {
            author: normalize(author),
            keyword: normalize(keyword),
        }
    }

    /// Returns true if the quote satisfies every supplied criterion (AND).
    pub fn matches(&self, quote: &Quote) -> bool {
        let author_ok = self
            .author
            .as_deref()
            .map(|needle| quote.author.to_lowercase().contains(needle))
            .unwrap_or(true);
        let keyword_ok = self
            .keyword
            .as_deref()
            .map(|needle| quote.text.to_lowercase().contains(needle))
            .unwrap_or(true);
        author_ok && keyword_ok
    }

    /// Narrow a collection to the quotes matching this filter.
    pub fn apply(&self, quotes: Vec<Quote>) -> Vec<Quote> {
        quotes.into_iter().filter(|q| self.matches(q)).collect()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}

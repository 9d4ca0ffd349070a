//! Quote endpoint handler.
//!
//! The whole request pipeline lives here: parse query → fetch upstream →
//! filter → select/format → respond. The handler is stateless; the only
//! suspension point is the upstream fetch.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::quotes::{select_random, Quote, QuoteFilter};

/// Query parameters recognized by the quote endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteQuery {
    pub author: Option<String>,
    pub keyword: Option<String>,
    pub format: Option<String>,
    pub all: Option<String>,
}

/// How the response should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// `all=true`: the entire filtered set as a JSON array.
    AllJson,
    /// `format=text`: one random quote as a plain-text line.
    SingleText,
    /// Default: one random quote as a JSON object.
    SingleJson,
}

impl ResponseMode {
    /// Derive the mode from the request flags.
    /// `all=true` wins over `format=text`; the precedence is easy to invert
    /// accidentally, so it is fixed here rather than at the dispatch site.
    pub fn from_query(query: &QuoteQuery) -> Self {
        if query.all.as_deref() == Some("true") {
            ResponseMode::AllJson
        } else if query.format.as_deref() == Some("text") {
            ResponseMode::SingleText
        } else {
            ResponseMode::SingleJson
        }
    }
}

/// GET handler for `/` and `/quotes`.
pub async fn get_quotes(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Response {
    let start = Instant::now();

    let quotes = match state.upstream.fetch_quotes().await {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!(error = %e, "Upstream fetch failed");
            metrics::record_upstream_failure();
            metrics::record_request("GET", StatusCode::BAD_GATEWAY.as_u16(), start);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream quote service unavailable" })),
            )
                .into_response();
        }
    };

    let filter = QuoteFilter::new(query.author.as_deref(), query.keyword.as_deref());
    let filtered = filter.apply(quotes);

    tracing::debug!(
        matched = filtered.len(),
        author = query.author.as_deref().unwrap_or(""),
        keyword = query.keyword.as_deref().unwrap_or(""),
        "Filtered upstream quotes"
    );

    let response = match ResponseMode::from_query(&query) {
        ResponseMode::AllJson => Json(filtered).into_response(),
        ResponseMode::SingleText => {
            let quote = pick_or_sentinel(&filtered);
            (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                quote.as_text_line(),
            )
                .into_response()
        }
        ResponseMode::SingleJson => Json(pick_or_sentinel(&filtered)).into_response(),
    };

    metrics::record_request("GET", response.status().as_u16(), start);
    response
}

/// Random pick with the sentinel fallback for an empty filtered set.
fn pick_or_sentinel(filtered: &[Quote]) -> Quote {
    select_random(filtered, &mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(Quote::sentinel)
}

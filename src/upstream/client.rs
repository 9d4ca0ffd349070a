//! HTTP client for the upstream quote service.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::config::UpstreamConfig;
use crate::quotes::Quote;

/// Errors from the upstream fetch. The handler maps every variant to 502.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Quote record exactly as the upstream serves it.
#[derive(Debug, Deserialize)]
struct WireQuote {
    q: String,
    a: String,
}

impl From<WireQuote> for Quote {
    fn from(wire: WireQuote) -> Self {
        Quote {
            text: wire.q,
            author: wire.a,
        }
    }
}

/// Client for the upstream quote service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: Url,
}

impl UpstreamClient {
    /// Build a client with the configured endpoint and request timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let url = Url::parse(&config.url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, url })
    }

    /// Fetch the full quote collection. One network call, no retries.
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>, UpstreamError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }
        let body = response.bytes().await?;
        decode_payload(&body)
    }
}

/// Decode the upstream wire payload into domain quotes.
fn decode_payload(body: &[u8]) -> Result<Vec<Quote>, UpstreamError> {
    let wire: Vec<WireQuote> = serde_json::from_slice(body)?;
    Ok(wire.into_iter().map(Quote::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_payload() {
        let body = br#"[{"q":"Be yourself.","a":"Oscar Wilde"},{"q":"Carpe diem.","a":"Horace"}]"#;
        let quotes = decode_payload(body).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].text, "Be yourself.");
        assert_eq!(quotes[0].author, "Oscar Wilde");
        assert_eq!(quotes[1].author, "Horace");
    }

    #[test]
    fn test_decode_empty_collection() {
        let quotes = decode_payload(b"[]").unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // Object instead of array
        assert!(matches!(
            decode_payload(br#"{"q":"x","a":"y"}"#),
            Err(UpstreamError::Malformed(_))
        ));
        // Array of wrong field names
        assert!(matches!(
            decode_payload(br#"[{"text":"x","author":"y"}]"#),
            Err(UpstreamError::Malformed(_))
        ));
        // Not JSON at all
        assert!(matches!(
            decode_payload(b"<html>"),
            Err(UpstreamError::Malformed(_))
        ));
    }

    #[test]
    fn test_client_rejects_unparseable_url() {
        let config = UpstreamConfig {
            url: "not a url".to_string(),
            timeout_secs: 5,
        };
        assert!(matches!(
            UpstreamClient::new(&config),
            Err(UpstreamError::InvalidUrl(_))
        ));
    }
}

//! Quote record as served to clients.

use serde::{Deserialize, Serialize};

/// A single quote. Exists only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Placeholder returned when no quote survives filtering.
    /// A normal 200 response, deliberately distinct from a system failure.
    pub fn sentinel() -> Self {
        Self {
            text: "No quote found".to_string(),
            author: "Unknown".to_string(),
        }
    }

    /// Plain-text rendering: `<text> - <author>`.
    pub fn as_text_line(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

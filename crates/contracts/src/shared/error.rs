//! Errors surfaced to the user when attaching a message fails.

use serde::Deserialize;
use thiserror::Error;

/// Submission failure. `Display` is the text shown inline in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachIssueError {
    /// The plugin server refused the request; its message is shown verbatim.
    #[error("{message}")]
    Rejected { message: String },
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl AttachIssueError {
    /// Build the error for a non-2xx response.
    ///
    /// The plugin server answers with `{"message": ...}` or `{"error": ...}`;
    /// anything else falls back to the HTTP status.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.message.or(r.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::Rejected { message }
    }
}

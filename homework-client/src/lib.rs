//! Homework HTTP Clients
//!
//! Small, typed HTTP clients for the two remote services the poller talks to:
//!
//! - [`PracticumClient`]: the homework review API, queried for status changes
//! - [`TelegramClient`]: the bot API used to deliver notifications
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let payload = client.fetch_statuses(0).await?;
//!     println!("{}", payload);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use serde_json::Value as JsonValue;

/// Longest response body kept in an error message
const MAX_ERROR_BODY: usize = 200;

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and decode its body as JSON
///
/// Checks the status code first, then reads the body as text and parses it,
/// so transport failures and malformed bodies are reported separately.
/// Body read errors drop the request URL, which may carry a token.
async fn handle_response(response: reqwest::Response) -> Result<JsonValue> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::unexpected_status(
            status.as_u16(),
            truncate(&error_text),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Transport(e.without_url()))?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(MAX_ERROR_BODY + 50);
        let truncated = truncate(&long);
        assert_eq!(truncated.len(), MAX_ERROR_BODY + 3);
        assert!(truncated.ends_with("..."));
    }
}

//! Telegram bot API client
//!
//! Only the single call the poller needs: sending a plain-text message.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_response;

/// Body of a `sendMessage` call
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for the Telegram bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new bot API client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the bot API
    /// * `token` - Bot token issued by BotFather
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new bot API client with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Send a plain-text message to a chat
    ///
    /// The bot token is part of the request URL, so transport errors are
    /// stripped of their URL before being returned.
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` username
    /// * `text` - Message text, sent without any markup
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", chat_id);

        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        handle_response(response).await.map(|_| ())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

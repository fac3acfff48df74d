//! Notifier service
//!
//! Delivers plain-text messages to a chat. Delivery failures are logged and
//! returned but never escalate: a lost notification must not stop polling.

use async_trait::async_trait;
use homework_client::TelegramClient;
use tracing::{debug, error, warn};

use crate::error::DeliveryError;

/// Service trait for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to `chat_id`
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Notifier backed by the Telegram bot API
pub struct TelegramNotifier {
    client: TelegramClient,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        match self.client.send_message(chat_id, text).await {
            Ok(()) => {
                debug!("Message delivered to chat {}", chat_id);
                Ok(())
            }
            Err(e) => {
                let err = DeliveryError::from(e);
                match &err {
                    DeliveryError::BadRequest(_) => error!("Failed to send message: {}", err),
                    DeliveryError::Failed(_) => warn!("Failed to send message: {}", err),
                }
                Err(err)
            }
        }
    }
}

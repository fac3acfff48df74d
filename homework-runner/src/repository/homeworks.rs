//! Homework status repository

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value as JsonValue;

/// Source of homework status payloads
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches status changes since the given timestamp
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the query window
    async fn fetch_statuses(&self, from_date: i64) -> Result<JsonValue, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<JsonValue, ClientError> {
        self.client.fetch_statuses(from_date).await
    }
}

//! Homework review API client

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::Result;
use crate::handle_response;

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework status endpoint
    /// * `token` - OAuth token of the user whose submissions are polled
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch submissions whose status changed since `from_date`
    ///
    /// Issues a single request; retrying is left to the caller.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the query window
    ///
    /// # Returns
    /// The decoded, not yet validated, response payload
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<JsonValue> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        handle_response(response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(format!("{}/api/user_api/homework_statuses/", server.uri()), "secret")
    }

    #[tokio::test]
    async fn test_fetch_statuses_sends_cursor_and_token() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "hw", "status": "approved"}],
            "current_date": 1000
        });

        Mock::given(method("GET"))
            .and(path("/api/user_api/homework_statuses/"))
            .and(header("Authorization", "OAuth secret"))
            .and(query_param("from_date", "900"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let payload = client_for(&server).fetch_statuses(900).await.unwrap();
        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn test_fetch_statuses_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_statuses(0).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::UnexpectedStatus { status: 503, ref message } if message == "maintenance"
        ));
    }

    #[tokio::test]
    async fn test_fetch_statuses_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_statuses(0).await.unwrap_err();
        assert_eq!(err.kind(), "DecodeError");
    }

    #[tokio::test]
    async fn test_fetch_statuses_connection_refused() {
        // Nothing listens on port 1
        let client = PracticumClient::new("http://127.0.0.1:1/statuses/", "secret");

        let err = client.fetch_statuses(0).await.unwrap_err();
        assert_eq!(err.kind(), "TransportError");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PracticumClient::new("http://localhost/statuses/", "secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("http://localhost/statuses/"));
    }
}

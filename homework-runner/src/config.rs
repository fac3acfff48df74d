//! Runner configuration
//!
//! Credentials, endpoints and timing for the poller. Built once at startup
//! and handed to the components that need it.

use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Optional file with environment variables, read from the working directory
pub const ENV_FILE: &str = ".env";

/// Default homework status endpoint
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Runner configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Bot token used to deliver notifications
    pub telegram_token: String,

    /// Chat that receives status updates and failure alerts
    pub telegram_chat_id: String,

    /// Homework status endpoint URL
    pub practicum_endpoint: String,

    /// Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub poll_interval: Duration,

    /// Timeout applied to every outgoing HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from the environment, filling gaps from `.env`
    ///
    /// Variables already set in the process environment win over the file.
    /// A missing `.env` is not an error; an unreadable or malformed one is.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(ENV_FILE);
        if !path.exists() {
            return Ok(Self::from_env());
        }

        let file_vars = read_env_file(path)?;
        debug!("Read {} variable(s) from {}", file_vars.len(), path.display());

        Ok(Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    ///
    /// Missing credentials are left empty here and reported by [`Config::validate`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(default))
        };

        Self {
            practicum_token: lookup("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: lookup("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: lookup("TELEGRAM_CHAT_ID").unwrap_or_default(),
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval: secs("RETRY_TIME", 600),
            request_timeout: secs("REQUEST_TIMEOUT", 30),
        }
    }

    /// Names of required credentials that are absent or blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Validates the configuration
    ///
    /// Every required credential must be present; the error lists all the
    /// missing ones.
    pub fn validate(&self) -> anyhow::Result<()> {
        let missing = self.missing_credentials();
        if !missing.is_empty() {
            anyhow::bail!(
                "missing required environment variables: {}",
                missing.join(", ")
            );
        }

        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

/// Parses a dotenv-style file into key/value pairs
fn read_env_file(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

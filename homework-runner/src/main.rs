//! Homework Runner
//!
//! A long-running poller that watches a user's homework submissions on the
//! review API and reports status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Credentials and timing loaded from the environment
//! - Repositories: HTTP access to the review API
//! - Services: Notification delivery through the bot API
//! - Scheduler: The poll loop, its cursor and failure de-duplication

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use homework_client::{PracticumClient, TelegramClient};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HomeworkRepository, HttpHomeworkRepository};
use crate::scheduler::StatusPoller;
use crate::service::{Notifier, TelegramNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_runner=debug,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework runner");

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    if let Err(e) = config.validate() {
        error!("CRITICAL: cannot start: {:#}", e);
        return Err(e.context("Invalid configuration"));
    }
    info!("Loaded configuration: {:?}", config);

    // Initialize clients
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        http_client.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http_client,
    );

    let homeworks: Arc<dyn HomeworkRepository> = Arc::new(HttpHomeworkRepository::new(practicum));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(telegram));

    // Wire Ctrl+C to the poller
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, initiating shutdown...");
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                // Keep the sender alive so the poller does not see a closed channel
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    });

    let cursor = chrono::Utc::now().timestamp();
    let mut poller = StatusPoller::new(&config, homeworks, notifier, cursor);

    poller.run(shutdown_rx).await;

    info!("Homework runner stopped");
    Ok(())
}

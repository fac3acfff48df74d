//! Status poller
//!
//! Queries the review API for status changes, turns the latest one into a
//! notification and sends it. Every failure inside a cycle is reported to
//! the chat once and then suppressed until it changes or a cycle succeeds.

use homework_core::{parse_status, validate_response};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{CycleError, ErrorSignature};
use crate::repository::HomeworkRepository;
use crate::service::Notifier;

/// What a single poll cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The query window had no status changes
    NoUpdates,

    /// The latest submission carried nothing to report
    Skipped,

    /// A status notification was sent (or attempted)
    Notified { delivered: bool },

    /// The cycle failed; `reported` is false when the alert was suppressed
    Failed { reported: bool },
}

/// Result of a successful cycle, before anything is sent
struct CycleUpdate {
    message: Option<String>,
    next_cursor: i64,
    empty: bool,
}

/// Poller that repeatedly checks homework statuses for one user
pub struct StatusPoller {
    chat_id: String,
    poll_interval: Duration,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    /// Lower bound of the next query window
    cursor: i64,
    /// Last failure reported to the chat
    last_error: Option<ErrorSignature>,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `config` - Runner configuration (chat and interval are read from it)
    /// * `homeworks` - Source of status payloads
    /// * `notifier` - Delivery channel for messages and alerts
    /// * `cursor` - Initial lower bound of the query window
    pub fn new(
        config: &Config,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        cursor: i64,
    ) -> Self {
        Self {
            chat_id: config.telegram_chat_id.clone(),
            poll_interval: config.poll_interval,
            homeworks,
            notifier,
            cursor,
            last_error: None,
        }
    }

    /// Current lower bound of the query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Runs poll cycles until a shutdown signal arrives
    ///
    /// The signal is only observed while waiting between cycles; a cycle in
    /// progress always completes.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.poll_interval, self.cursor
        );

        loop {
            let outcome = self.poll_once().await;
            debug!("Poll cycle finished: {:?}", outcome);

            tokio::select! {
                _ = time::sleep(self.poll_interval) => {}
                _ = shutdown.recv() => {
                    info!("Shutdown requested, stopping status poller");
                    break;
                }
            }
        }
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let update = match self.check_statuses().await {
            Ok(update) => update,
            Err(e) => return self.report_failure(e).await,
        };

        self.last_error = None;

        let outcome = match update.message {
            Some(message) => {
                let delivered = self.notifier.notify(&self.chat_id, &message).await.is_ok();
                if delivered {
                    info!("Status notification sent");
                }
                CycleOutcome::Notified { delivered }
            }
            None if update.empty => CycleOutcome::NoUpdates,
            None => {
                debug!("Latest submission has nothing to report");
                CycleOutcome::Skipped
            }
        };

        self.cursor = update.next_cursor;
        outcome
    }

    /// Fetches, validates and interprets one query window
    async fn check_statuses(&self) -> Result<CycleUpdate, CycleError> {
        let payload = self.homeworks.fetch_statuses(self.cursor).await?;
        let response = validate_response(payload)?;
        let next_cursor = response.next_cursor(self.cursor);

        if response.homeworks.is_empty() {
            debug!("No new homework statuses");
            return Ok(CycleUpdate {
                message: None,
                next_cursor,
                empty: true,
            });
        }

        if response.homeworks.len() > 1 {
            debug!(
                "{} submissions changed, reporting the latest one",
                response.homeworks.len()
            );
        }

        let message = parse_status(response.latest())?;
        Ok(CycleUpdate {
            message,
            next_cursor,
            empty: false,
        })
    }

    /// Logs a failed cycle and alerts the chat unless it was already alerted
    async fn report_failure(&mut self, err: CycleError) -> CycleOutcome {
        let signature = err.signature();

        if self.last_error.as_ref() == Some(&signature) {
            debug!("Failure unchanged since last alert: {}", err);
            return CycleOutcome::Failed { reported: false };
        }

        let message = format!("Program failure: {}", err);
        error!("{}", message);

        if self.notifier.notify(&self.chat_id, &message).await.is_err() {
            debug!("Failure alert could not be delivered");
        }

        self.last_error = Some(signature);
        CycleOutcome::Failed { reported: true }
    }
}

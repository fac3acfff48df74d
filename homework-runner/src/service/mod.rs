//! Service layer
//!
//! Services the poller depends on. They are trait-based so the poll loop
//! can be tested without a bot behind it.

mod notifier;

pub use notifier::{Notifier, TelegramNotifier};

//! Scheduler layer for the runner
//!
//! Owns the poll loop: the query cursor, the failure de-duplication state
//! and the pause between cycles.

pub mod poller;

pub use poller::StatusPoller;

//! Repository layer
//!
//! Repositories are thin seams over the HTTP clients. They carry no
//! business logic and exist so the poller can be driven by in-memory fakes
//! in tests.

mod homeworks;

pub use homeworks::{HomeworkRepository, HttpHomeworkRepository};

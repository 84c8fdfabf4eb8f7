//! Utilities shared across database connectors.

mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};

//! Request Context
//!
//! A deadline created once per use-case call and shared by everything that
//! runs beneath it.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::shared::errors::{AppError, DEADLINE_EXCEEDED};

// Used when `now + timeout` overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365);

/// Deadline-bound context for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Instant,
}

impl RequestContext {
    /// Create a context that expires `timeout` from now
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let now = Instant::now();
        let deadline = now
            .checked_add(timeout)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self { deadline }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Run `operation` until it completes or the deadline passes.
    ///
    /// On expiry the operation is dropped, which cancels whatever it was
    /// awaiting, and `ERR_DEADLINE_EXCEEDED` is returned.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or `DEADLINE_EXCEEDED` on expiry.
    pub async fn run<T, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout_at(self.deadline, operation).await {
            Ok(result) => result,
            Err(elapsed) => {
                tracing::warn!("Request deadline exceeded");
                Err(DEADLINE_EXCEEDED.to_error().with_raw(elapsed))
            }
        }
    }
}

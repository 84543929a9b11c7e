//! Bounded retry for remote store calls
//!
//! Linear backoff scaled by attempt number; the error's own
//! [`is_retryable`](crate::error::StoreError::is_retryable) classification
//! decides whether another attempt happens.

use crate::error::StoreError;
use std::future::Future;
use std::time::Duration;

/// Retry policy for remote store calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff_ms: 200,
        }
    }
}

impl RetryPolicy {
    /// No sleeps, for tests
    #[must_use]
    pub fn immediate(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            base_backoff_ms: 0,
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        Duration::from_millis(self.base_backoff_ms.saturating_mul(attempt as u64))
    }
}

/// Run a remote call with bounded retry
///
/// # Errors
/// The last error once attempts are exhausted, or the first non-retryable
/// error immediately.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let mut last_error = StoreError::Unavailable("no attempts made".to_string());

    for attempt in 1..=policy.max_attempts.max(1) {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if !error.is_retryable() => return Err(error),
            Err(error) => {
                tracing::warn!(attempt, error = %error, "remote store call failed");
                if attempt < policy.max_attempts {
                    let delay = policy.delay_for_attempt(attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                last_error = error;
            }
        }
    }

    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn transient_errors_are_retried() {
        let attempts = AtomicUsize::new(0);
        let result = with_retry(&RetryPolicy::immediate(3), || async {
            if attempts.fetch_add(1, Ordering::SeqCst) < 1 {
                Err(StoreError::Network("reset".to_string()))
            } else {
                Ok("stored")
            }
        })
        .await;
        assert_eq!(result, Ok("stored"));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn not_found_is_not_retried() {
        let attempts = AtomicUsize::new(0);
        let result: Result<(), _> = with_retry(&RetryPolicy::immediate(3), || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::NotFound("brief".to_string()))
        })
        .await;
        assert_eq!(result, Err(StoreError::NotFound("brief".to_string())));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}

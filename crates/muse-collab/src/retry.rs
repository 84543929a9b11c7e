//! Retry and timeout wrapper for collaborator calls
//!
//! Every call runs under a per-call timeout and a bounded retry budget with
//! exponential backoff plus jitter. Non-retryable errors abort immediately;
//! a timeout discards any partial result.

use crate::error::CollabError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Bounded-retry policy with exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first (default 3)
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub multiplier: f64,
    /// Fractional jitter added to each sleep (0.0 - 1.0)
    pub jitter: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: 0.5,
        }
    }
}

impl RetryPolicy {
    /// Policy with no sleeps, for tests
    #[must_use]
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            jitter: 0.0,
            ..Self::default()
        }
    }

    fn next_backoff(&self, current: Duration) -> Duration {
        current.mul_f64(self.multiplier).min(self.max_backoff)
    }

    fn jittered(&self, base: Duration) -> Duration {
        if self.jitter <= 0.0 || base.is_zero() {
            return base;
        }
        let factor: f64 = rand::rng().random_range(0.0..=self.jitter);
        base + base.mul_f64(factor)
    }
}

/// Per-call timeouts by operation weight
pub mod timeouts {
    use std::time::Duration;

    pub const BRIEF_REFINEMENT: Duration = Duration::from_secs(30);
    pub const INSPIRATIONS: Duration = Duration::from_secs(45);
    pub const PROPOSAL_GENERATION: Duration = Duration::from_secs(120);
    pub const PROPOSAL_OPTIMIZATION: Duration = Duration::from_secs(90);
    pub const EXECUTION_PLAN: Duration = Duration::from_secs(60);
    pub const EXPRESSION_REFINEMENT: Duration = Duration::from_secs(60);
}

/// Run a fallible async call under timeout and bounded retry
///
/// A rate-limit error that names `retry_after` sleeps at least that long
/// before the next attempt.
///
/// # Errors
/// The last error once the budget is exhausted, or the first non-retryable
/// error immediately.
pub async fn call_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    call_timeout: Duration,
    mut op: F,
) -> Result<T, CollabError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CollabError>>,
{
    let mut backoff = policy.initial_backoff;
    let mut last_error = CollabError::Unavailable("no attempts made".to_string());

    for attempt in 1..=policy.max_attempts.max(1) {
        let error = match tokio::time::timeout(call_timeout, op()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => e,
            Err(_) => CollabError::Timeout {
                secs: call_timeout.as_secs(),
            },
        };

        if !error.is_retryable() {
            return Err(error);
        }

        tracing::warn!(attempt, error = %error, "collaborator call failed");

        if attempt < policy.max_attempts {
            let mut sleep = policy.jittered(backoff);
            if let CollabError::RateLimit {
                retry_after_secs: Some(secs),
            } = &error
            {
                sleep = sleep.max(Duration::from_secs(*secs));
            }
            if !sleep.is_zero() {
                tokio::time::sleep(sleep).await;
            }
            backoff = policy.next_backoff(backoff);
        }
        last_error = error;
    }

    Err(last_error)
}

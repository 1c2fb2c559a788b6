use std::{future::Future, time::Duration};

use rand::Rng;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Bounds for retrying an operation that failed with a retryable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Max attempts before failure, including the first one
    pub max_attempts: u32,
    /// Backoff after the first failed attempt, doubled after each further failure
    pub initial_backoff: Duration,
    /// Upper bound for the backoff before jitter is added
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(50);
    pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(1);

    /// Backoff to wait after `failed_attempts` consecutive failures, without jitter
    pub fn backoff(&self, failed_attempts: u32) -> Duration {
        let factor = 2_u32.saturating_pow(failed_attempts.saturating_sub(1));

        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
            max_backoff: Self::DEFAULT_MAX_BACKOFF,
        }
    }
}

/// Context for service methods providing retry logic
pub struct RetryContext {
    policy: RetryPolicy,
}

impl RetryContext {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Execute an operation with automatic retry logic
    ///
    /// Errors are retried only when [`Error::to_retry_strategy`] returns
    /// [`ErrorRetryStrategy::Retry`]. Each retry waits for the exponential backoff plus
    /// up to half of it again as random jitter, so competing callers spread out.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "inventory number allocation")
    /// - `operation`: Closure producing a fresh attempt each time it is called
    ///
    /// # Returns
    /// - `Ok(R)`: Result of the first successful attempt
    /// - `Err(Error)`: The permanent error, or the last retryable error once attempts run out
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= max_attempts {
                            tracing::warn!(
                                "Max attempts ({}) exceeded for {}: {}",
                                max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = with_jitter(self.policy.backoff(attempt_count));

                        tracing::debug!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count + 1,
                            max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

fn with_jitter(backoff: Duration) -> Duration {
    let half_ms = (backoff.as_millis() / 2) as u64;
    if half_ms == 0 {
        return backoff;
    }

    backoff + Duration::from_millis(rand::rng().random_range(0..=half_ms))
}

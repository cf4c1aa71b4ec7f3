//! Generic retry executor with bounded attempts and linear backoff
//!
//! The executor runs an async operation, asks a [`RetryPolicy`] whether each
//! failure is transient, waits `step * n` before the n-th retry, and gives
//! up once the attempt budget is spent. The terminal error is always handed
//! back to the caller inside [`RetryError`]; nothing is swallowed.
//!
//! ```text
//!   attempting ──ok──► succeeded
//!       │
//!      err ──policy: stop──────────────► failed (NonRetryable)
//!       │
//!   policy: retry ──budget spent──────► failed (Exhausted)
//!       │
//!   retry-wait ──sleep(step * n)──► attempting
//! ```

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::sleep::{Sleeper, TokioSleeper};

/// Errors that can occur during retry operations
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// Every attempt failed with a retryable error
    #[error("All retry attempts exhausted after {attempts} tries: {last}")]
    Exhausted { attempts: u32, last: E },

    /// The operation failed with a non-retryable error
    #[error("Operation failed with non-retryable error: {source}")]
    NonRetryable { attempts: u32, source: E },

    /// The retry configuration is invalid
    #[error("Invalid retry configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Result type for retry operations
pub type RetryResult<T, E> = Result<T, RetryError<E>>;

/// Outcome of a retry execution including the result and the waits taken.
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub result: RetryResult<T, E>,
    pub attempts: u32,
    /// Delay requested before each retry, in order.
    pub delays: Vec<Duration>,
}

impl<T, E> RetryOutcome<T, E> {
    /// Sum of all waits between attempts.
    pub fn total_delay(&self) -> Duration {
        self.delays.iter().sum()
    }
}

/// Trait for determining whether an error should be retried
pub trait RetryPolicy<E> {
    /// Decide what to do after attempt number `attempt` (1-based) failed.
    fn should_retry(&self, error: &E, attempt: u32) -> RetryDecision;
}

/// Decision for whether to retry an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry after the configured backoff
    Retry,
    /// Don't retry the operation
    Stop,
}

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// The n-th retry waits `n * backoff_step`
    pub backoff_step: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: 3, backoff_step: Duration::from_millis(1250) }
    }
}

impl RetryConfig {
    /// Create a configuration builder
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), RetryError<()>> {
        if self.max_attempts == 0 {
            return Err(RetryError::InvalidConfiguration {
                message: "max_attempts must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Wait before retry number `retry` (1-based).
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        self.backoff_step.saturating_mul(retry)
    }
}

/// Builder for RetryConfig with fluent API
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    pub fn backoff_step(mut self, step: Duration) -> Self {
        self.config.backoff_step = step;
        self
    }

    pub fn build(self) -> Result<RetryConfig, RetryError<()>> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// The main retry executor
pub struct RetryExecutor<P, S = TokioSleeper> {
    config: RetryConfig,
    policy: P,
    sleeper: S,
}

impl<P> RetryExecutor<P, TokioSleeper> {
    /// Create a new retry executor that sleeps on the tokio timer
    pub fn new(config: RetryConfig, policy: P) -> Self {
        Self { config, policy, sleeper: TokioSleeper }
    }
}

impl<P, S> RetryExecutor<P, S> {
    /// Replace the sleeper used between attempts
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryExecutor<P, S2> {
        RetryExecutor { config: self.config, policy: self.policy, sleeper }
    }
}

impl<P, S: Sleeper> RetryExecutor<P, S> {
    /// Execute an operation with retry logic and return outcome statistics.
    #[instrument(skip(self, operation), fields(max_attempts = self.config.max_attempts))]
    pub async fn execute_with_outcome<F, Fut, T, E>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        P: RetryPolicy<E>,
        E: fmt::Debug,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut delays = Vec::new();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, max_attempts, "Executing operation");

            let error = match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(attempt, "Operation succeeded after retry");
                    }
                    return RetryOutcome { result: Ok(value), attempts: attempt, delays };
                }
                Err(error) => error,
            };

            if self.policy.should_retry(&error, attempt) == RetryDecision::Stop {
                debug!(attempt, ?error, "Retry policy determined not to retry");
                return RetryOutcome {
                    result: Err(RetryError::NonRetryable { attempts: attempt, source: error }),
                    attempts: attempt,
                    delays,
                };
            }

            if attempt >= max_attempts {
                warn!(attempts = attempt, ?error, "All retry attempts exhausted");
                return RetryOutcome {
                    result: Err(RetryError::Exhausted { attempts: attempt, last: error }),
                    attempts: attempt,
                    delays,
                };
            }

            let delay = self.config.delay_before_retry(attempt);
            warn!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                "Operation failed, retrying after backoff"
            );
            self.sleeper.sleep(delay).await;
            delays.push(delay);
        }
    }
}

//! Resilience patterns for transient failures
//!
//! Provides a **generic, reusable** retry executor:
//! - bounded attempts (initial try included in the budget)
//! - linear backoff (`step * n` before the n-th retry)
//! - pluggable retry policy deciding which errors are transient
//! - pluggable [`Sleeper`] so tests can observe waits without real delays
//!
//! The HTTP layer in `podpublish-infra` builds its rate-limit handling on
//! top of this module; nothing here knows about HTTP.

pub mod retry;
pub mod sleep;

pub use retry::{
    RetryConfig, RetryConfigBuilder, RetryDecision, RetryError, RetryExecutor, RetryOutcome,
    RetryPolicy, RetryResult,
};
pub use sleep::{Sleeper, TokioSleeper};

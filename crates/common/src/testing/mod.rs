//! Testing utilities and helpers
//!
//! - **[`RecordingSleeper`]**: a [`Sleeper`](crate::resilience::Sleeper)
//!   that records requested delays and returns immediately
//! - **`assert_error_contains!`**: assert on the rendered error message
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use podpublish_common::resilience::{RetryConfig, RetryDecision, RetryExecutor, RetryPolicy};
//! use podpublish_common::testing::RecordingSleeper;
//!
//! struct Always;
//!
//! impl RetryPolicy<&'static str> for Always {
//!     fn should_retry(&self, _: &&'static str, _: u32) -> RetryDecision {
//!         RetryDecision::Retry
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let sleeper = RecordingSleeper::new();
//! let executor = RetryExecutor::new(RetryConfig::default(), Always).with_sleeper(sleeper.clone());
//! let _ = executor.execute_with_outcome(|| async { Err::<(), _>("boom") }).await;
//! assert_eq!(sleeper.recorded(), vec![Duration::from_millis(1250), Duration::from_millis(2500)]);
//! # });
//! ```

pub mod sleep;

pub use sleep::RecordingSleeper;

/// Assert that a `Result` is an error whose `Display` output contains a
/// substring.
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

//! Sleep abstraction used between retry attempts.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Waits between retry attempts.
///
/// Production code uses [`TokioSleeper`]; tests substitute a recorder (see
/// `podpublish_common::testing::RecordingSleeper`) to assert on the requested
/// delays without slowing the suite down.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[async_trait]
impl<T: Sleeper + ?Sized> Sleeper for Arc<T> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

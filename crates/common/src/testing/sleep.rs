use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::resilience::Sleeper;

/// Sleeper that records every requested delay and never actually waits.
///
/// Clones share the same record, so hand one clone to the code under test
/// and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }

    /// Number of sleeps requested so far.
    pub fn count(&self) -> usize {
        self.delays.lock().map(|d| d.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
    }
}

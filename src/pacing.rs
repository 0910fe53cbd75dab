use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Cooling period between consecutive calls to a rate-limited service.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait before the next call may be issued.
    async fn pause(&self);
}

/// Sleeps a fixed delay on every pause. A zero delay never sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!(delay_ms = self.delay.as_millis() as u64, "pacing before next call");
        sleep(self.delay).await;
    }
}

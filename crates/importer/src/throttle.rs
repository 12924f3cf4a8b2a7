//! Pacing between consecutive page requests.

use std::time::Duration;

use async_trait::async_trait;

/// Waits between two page requests to stay under the remote rate limit.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Sleep for a fixed interval. No adaptive backoff.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

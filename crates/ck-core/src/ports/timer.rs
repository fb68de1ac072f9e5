use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub type TimerTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Named one-shot timers.
///
/// Starting a key that is already pending cancels the pending run.
#[async_trait]
pub trait TimerPort: Send + Sync {
    async fn start(&self, key: &str, delay: Duration, on_expire: TimerTask) -> anyhow::Result<()>;

    async fn stop(&self, key: &str) -> anyhow::Result<()>;

    async fn is_pending(&self, key: &str) -> bool;
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use ck_core::ports::{TimerPort, TimerTask};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Keyed one-shot timers backed by spawned tokio tasks.
#[derive(Default)]
pub struct Timer {
    timers: Arc<Mutex<HashMap<String, AbortHandle>>>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TimerPort for Timer {
    async fn start(&self, key: &str, delay: Duration, on_expire: TimerTask) -> anyhow::Result<()> {
        let timers = Arc::clone(&self.timers);
        let key_owned = key.to_string();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(key) {
            existing.abort();
            debug!(key, "pending timer replaced");
        }

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            timers.lock().await.remove(&key_owned);
            on_expire.await;
        });

        timers_guard.insert(key.to_string(), handle.abort_handle());
        debug!(key, delay_ms = delay.as_millis() as u64, "timer started");
        Ok(())
    }

    async fn stop(&self, key: &str) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(handle) = timers_guard.remove(key) {
            handle.abort();
            debug!(key, "timer stopped");
        }
        Ok(())
    }

    async fn is_pending(&self, key: &str) -> bool {
        self.timers.lock().await.contains_key(key)
    }
}

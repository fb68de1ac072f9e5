use std::sync::Arc;

use ck_core::HistoryStore;
use tokio::sync::RwLock;

/// History shared by the monitor and the display surface.
/// One writer at a time; readers take snapshots under the read lock.
pub type SharedHistory = Arc<RwLock<HistoryStore>>;

pub fn shared_history() -> SharedHistory {
    Arc::new(RwLock::new(HistoryStore::new()))
}

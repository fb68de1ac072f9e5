use ck_core::history::filter;
use ck_core::HistoryEntry;
use tokio::sync::RwLock;

use crate::history::SharedHistory;

/// Filtered view of the history for a display surface.
///
/// Only the query text is remembered; the projection is recomputed from the
/// live store on every call, so it always reflects the latest mutations.
pub struct SearchHistory {
    history: SharedHistory,
    query: RwLock<String>,
}

impl SearchHistory {
    pub fn new(history: SharedHistory) -> Self {
        Self {
            history,
            query: RwLock::new(String::new()),
        }
    }

    pub async fn search_text_changed(&self, query: impl Into<String>) -> Vec<HistoryEntry> {
        *self.query.write().await = query.into();
        self.visible_entries().await
    }

    pub async fn visible_entries(&self) -> Vec<HistoryEntry> {
        let query = self.query.read().await.clone();
        self.execute(&query).await
    }

    pub async fn current_query(&self) -> String {
        self.query.read().await.clone()
    }

    pub async fn execute(&self, query: &str) -> Vec<HistoryEntry> {
        let snapshot = self.history.read().await.iterate();
        filter(query, &snapshot)
    }
}

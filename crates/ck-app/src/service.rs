//! Facade over the history use cases, shaped after the events a display
//! surface emits: select, delete, clear, edit and search.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use ck_core::{EditOutcome, EntryId, HistoryEntry, HistorySnapshot};
use tracing::{debug, info};

use crate::deps::AppDeps;
use crate::history::{shared_history, SharedHistory};
use crate::settings::MonitorSettings;
use crate::usecases::{
    ActivateEntry, ActivateOutcome, CleanupStaleImages, ClearHistory, ClipboardMonitor,
    DeleteEntries, EditTextEntry, ExportHistory, SearchHistory,
};

pub struct HistoryService {
    history: SharedHistory,
    monitor: Arc<ClipboardMonitor>,
    activate: ActivateEntry,
    delete: DeleteEntries,
    clear: ClearHistory,
    edit: EditTextEntry,
    search: SearchHistory,
    export: ExportHistory,
    cleanup: CleanupStaleImages,
}

impl HistoryService {
    pub fn new(deps: AppDeps, settings: &MonitorSettings) -> Self {
        let history = shared_history();
        let monitor = Arc::new(ClipboardMonitor::new(&deps, history.clone(), settings));
        let file_store = deps.file_store;

        Self {
            activate: ActivateEntry::new(history.clone(), file_store.clone(), monitor.clone()),
            delete: DeleteEntries::new(history.clone(), file_store.clone()),
            clear: ClearHistory::new(history.clone(), file_store.clone()),
            edit: EditTextEntry::new(history.clone()),
            search: SearchHistory::new(history.clone()),
            export: ExportHistory::new(history.clone(), file_store.clone()),
            cleanup: CleanupStaleImages::new(history.clone(), file_store),
            history,
            monitor,
        }
    }

    pub fn monitor(&self) -> Arc<ClipboardMonitor> {
        Arc::clone(&self.monitor)
    }

    pub fn history(&self) -> SharedHistory {
        Arc::clone(&self.history)
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        self.history.read().await.iterate()
    }

    /// Entries matching the current search text, newest first.
    pub async fn visible_entries(&self) -> Vec<HistoryEntry> {
        self.search.visible_entries().await
    }

    pub async fn search_text_changed(&self, query: impl Into<String>) -> Vec<HistoryEntry> {
        self.search.search_text_changed(query).await
    }

    pub async fn current_query(&self) -> String {
        self.search.current_query().await
    }

    pub async fn select(&self, entry_ids: &[EntryId]) -> ActivateOutcome {
        self.activate.execute_many(entry_ids).await
    }

    pub async fn delete(&self, entry_ids: &[EntryId]) -> usize {
        self.delete.execute(entry_ids).await
    }

    pub async fn clear(&self) -> usize {
        self.clear.execute().await
    }

    /// Replace the text of an entry and put the edited text on the clipboard.
    pub async fn edit(&self, entry_id: &EntryId, new_text: String) -> EditOutcome {
        let outcome = self.edit.execute(entry_id, new_text).await;
        if outcome == EditOutcome::Applied {
            let activated = self.activate.execute(entry_id).await;
            debug!(?activated, "edited entry re-activated");
        }
        outcome
    }

    pub async fn export(&self, path: &Path) -> Result<usize> {
        self.export.execute(path).await
    }

    pub async fn cleanup_stale_images(&self) -> Result<usize> {
        self.cleanup.execute().await
    }

    /// Clear the history and release every image file it referenced.
    pub async fn shutdown(&self) -> usize {
        let cleared = self.clear.execute().await;
        info!(cleared, "history released on shutdown");
        cleared
    }
}

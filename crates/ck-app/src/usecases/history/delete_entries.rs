use std::sync::Arc;

use ck_core::ports::FileStorePort;
use ck_core::EntryId;
use tracing::info;

use crate::history::SharedHistory;
use crate::usecases::internal::discard_image_files;

/// Removes entries and their backing image files.
pub struct DeleteEntries {
    history: SharedHistory,
    file_store: Arc<dyn FileStorePort>,
}

impl DeleteEntries {
    pub fn new(history: SharedHistory, file_store: Arc<dyn FileStorePort>) -> Self {
        Self {
            history,
            file_store,
        }
    }

    /// Returns how many of `entry_ids` were present and removed.
    #[tracing::instrument(name = "usecase.delete_entries.execute", skip_all, fields(count = entry_ids.len()))]
    pub async fn execute(&self, entry_ids: &[EntryId]) -> usize {
        let removed: Vec<_> = {
            let mut history = self.history.write().await;
            entry_ids
                .iter()
                .filter_map(|id| history.remove(id))
                .collect()
        };

        let files = discard_image_files(self.file_store.as_ref(), &removed).await;
        info!(removed = removed.len(), files, "entries deleted");
        removed.len()
    }
}

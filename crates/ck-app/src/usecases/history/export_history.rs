use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ck_core::history::render_export;
use ck_core::ports::FileStorePort;
use tracing::info;

use crate::history::SharedHistory;

/// Writes the whole history, newest first, to a text file.
pub struct ExportHistory {
    history: SharedHistory,
    file_store: Arc<dyn FileStorePort>,
}

impl ExportHistory {
    pub fn new(history: SharedHistory, file_store: Arc<dyn FileStorePort>) -> Self {
        Self {
            history,
            file_store,
        }
    }

    #[tracing::instrument(name = "usecase.export_history.execute", skip(self), fields(path = %path.display()))]
    pub async fn execute(&self, path: &Path) -> Result<usize> {
        let snapshot = self.history.read().await.iterate();
        let rendered = render_export(&snapshot);
        self.file_store
            .write_text_file(path, &rendered)
            .await
            .context("Failed to export history")?;
        info!(entries = snapshot.len(), "history exported");
        Ok(snapshot.len())
    }
}

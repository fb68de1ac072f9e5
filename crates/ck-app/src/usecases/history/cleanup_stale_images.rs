use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use ck_core::ports::FileStorePort;
use tracing::info;

use crate::history::SharedHistory;

/// Deletes image files left behind by an earlier run.
///
/// History lives only as long as the process, so any stored image that no
/// current entry references is stale.
pub struct CleanupStaleImages {
    history: SharedHistory,
    file_store: Arc<dyn FileStorePort>,
}

impl CleanupStaleImages {
    pub fn new(history: SharedHistory, file_store: Arc<dyn FileStorePort>) -> Self {
        Self {
            history,
            file_store,
        }
    }

    #[tracing::instrument(name = "usecase.cleanup_stale_images.execute", skip_all)]
    pub async fn execute(&self) -> Result<usize> {
        let referenced: HashSet<PathBuf> = {
            let snapshot = self.history.read().await.iterate();
            snapshot
                .iter()
                .filter_map(|entry| entry.image_ref())
                .map(|image| image.path.clone())
                .collect()
        };

        let images = self
            .file_store
            .list_images()
            .await
            .context("Failed to list stored images")?;

        let mut deleted = 0;
        for path in images.iter().filter(|path| !referenced.contains(*path)) {
            if self.file_store.delete(path).await {
                deleted += 1;
            }
        }
        info!(found = images.len(), deleted, "stale images cleaned up");
        Ok(deleted)
    }
}

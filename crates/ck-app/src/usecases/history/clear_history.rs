use std::sync::Arc;

use ck_core::ports::FileStorePort;
use tracing::info;

use crate::history::SharedHistory;
use crate::usecases::internal::discard_image_files;

pub struct ClearHistory {
    history: SharedHistory,
    file_store: Arc<dyn FileStorePort>,
}

impl ClearHistory {
    pub fn new(history: SharedHistory, file_store: Arc<dyn FileStorePort>) -> Self {
        Self {
            history,
            file_store,
        }
    }

    #[tracing::instrument(name = "usecase.clear_history.execute", skip_all)]
    pub async fn execute(&self) -> usize {
        let cleared = self.history.write().await.clear();
        let files = discard_image_files(self.file_store.as_ref(), &cleared).await;
        info!(cleared = cleared.len(), files, "history cleared");
        cleared.len()
    }
}

use std::sync::Arc;

use ck_core::ports::FileStorePort;
use ck_core::{ClipboardPayload, EntryContent, EntryId, ImagePayload, ImageRef};
use tracing::{info, warn};

use super::ClipboardMonitor;
use crate::history::SharedHistory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivateOutcome {
    Written,
    NotFound,
    MissingImageFile,
    DeviceError(String),
}

/// Puts a history entry back on the system clipboard.
pub struct ActivateEntry {
    history: SharedHistory,
    file_store: Arc<dyn FileStorePort>,
    monitor: Arc<ClipboardMonitor>,
}

impl ActivateEntry {
    pub fn new(
        history: SharedHistory,
        file_store: Arc<dyn FileStorePort>,
        monitor: Arc<ClipboardMonitor>,
    ) -> Self {
        Self {
            history,
            file_store,
            monitor,
        }
    }

    #[tracing::instrument(name = "usecase.activate_entry.execute", skip(self), fields(entry_id = %entry_id))]
    pub async fn execute(&self, entry_id: &EntryId) -> ActivateOutcome {
        let content = {
            let history = self.history.read().await;
            match history.get(entry_id) {
                Some(entry) => entry.content().clone(),
                None => return ActivateOutcome::NotFound,
            }
        };

        let payload = match content {
            EntryContent::Text(text) => ClipboardPayload::Text(text),
            EntryContent::Image(image) => match self.load_image(&image).await {
                Some(payload) => ClipboardPayload::Image(payload),
                None => return ActivateOutcome::MissingImageFile,
            },
        };

        self.write(&payload).await
    }

    /// Activate several entries at once.
    ///
    /// Text entries are joined in history order with no separator and written
    /// as a single text payload; image entries in a multi-selection are
    /// skipped. A one-element selection is the same as [`Self::execute`].
    #[tracing::instrument(name = "usecase.activate_entry.execute_many", skip_all, fields(count = entry_ids.len()))]
    pub async fn execute_many(&self, entry_ids: &[EntryId]) -> ActivateOutcome {
        match entry_ids {
            [] => ActivateOutcome::NotFound,
            [single] => self.execute(single).await,
            _ => {
                let snapshot = self.history.read().await.iterate();
                let mut selected = 0usize;
                let mut combined = String::new();
                for entry in snapshot.iter().filter(|e| entry_ids.contains(e.id())) {
                    if let Some(text) = entry.text_content() {
                        combined.push_str(text);
                        selected += 1;
                    }
                }
                if selected == 0 {
                    return ActivateOutcome::NotFound;
                }
                self.write(&ClipboardPayload::Text(combined)).await
            }
        }
    }

    async fn load_image(&self, image: &ImageRef) -> Option<ImagePayload> {
        match self.file_store.read_image(&image.path).await {
            Ok(Some(bytes)) => Some(ImagePayload {
                width: image.width,
                height: image.height,
                format: image.format,
                bytes,
            }),
            Ok(None) => {
                warn!(path = %image.path.display(), "image file no longer exists");
                None
            }
            Err(err) => {
                warn!(path = %image.path.display(), error = %err, "failed to read image file");
                None
            }
        }
    }

    async fn write(&self, payload: &ClipboardPayload) -> ActivateOutcome {
        match self.monitor.write_back(payload).await {
            Ok(()) => {
                info!("entry written to clipboard");
                ActivateOutcome::Written
            }
            Err(err) => {
                warn!(error = %err, "write-back failed");
                ActivateOutcome::DeviceError(format!("{err:#}"))
            }
        }
    }
}

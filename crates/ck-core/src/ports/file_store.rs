use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Local storage for captured images and exported history.
#[async_trait]
pub trait FileStorePort: Send + Sync {
    /// Persist encoded image bytes under a fresh unique name.
    async fn save_image(&self, bytes: &[u8]) -> Result<PathBuf>;

    /// `Ok(None)` when the file no longer exists.
    async fn read_image(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Best-effort removal. Returns whether a file was actually deleted.
    async fn delete(&self, path: &Path) -> bool;

    /// Image files previously written by [`FileStorePort::save_image`].
    async fn list_images(&self) -> Result<Vec<PathBuf>>;

    async fn write_text_file(&self, path: &Path, content: &str) -> Result<()>;
}

//! Filesystem-backed storage for captured images and history exports.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ck_core::ports::FileStorePort;
use rand::Rng;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub const IMAGE_FILE_PREFIX: &str = "clipboard_image_";
const IMAGE_EXTENSION: &str = "png";
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 8;
const MAX_NAME_ATTEMPTS: usize = 4;

pub struct FilesystemFileStore {
    image_dir: PathBuf,
}

impl FilesystemFileStore {
    pub fn new(image_dir: PathBuf) -> Self {
        Self { image_dir }
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.image_dir)
            .await
            .with_context(|| format!("Failed to create image directory {}", self.image_dir.display()))
    }

    /// `clipboard_image_<YYYYmmdd_HHMMSS_mmm>_<8 random chars>.png`
    fn next_image_path(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        self.image_dir.join(format!(
            "{IMAGE_FILE_PREFIX}{timestamp}_{suffix}.{IMAGE_EXTENSION}"
        ))
    }

    fn is_managed_image(path: &Path) -> bool {
        let has_prefix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(IMAGE_FILE_PREFIX));
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION));
        has_prefix && has_extension
    }
}

#[async_trait]
impl FileStorePort for FilesystemFileStore {
    async fn save_image(&self, bytes: &[u8]) -> Result<PathBuf> {
        self.ensure_dir().await?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let path = self.next_image_path();
            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to create image file {}", path.display()))
                }
            };

            file.write_all(bytes)
                .await
                .context("Failed to write image data")?;
            file.flush().await.context("Failed to flush image data")?;

            debug!(path = %path.display(), len = bytes.len(), "image saved");
            return Ok(path);
        }

        anyhow::bail!("Failed to find a free image file name after {MAX_NAME_ATTEMPTS} attempts")
    }

    async fn read_image(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read image file {}", path.display()))
            }
        }
    }

    async fn delete(&self, path: &Path) -> bool {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = %path.display(), "image deleted");
                true
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "image already gone");
                false
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to delete image");
                false
            }
        }
    }

    async fn list_images(&self) -> Result<Vec<PathBuf>> {
        let mut dir = match tokio::fs::read_dir(&self.image_dir).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to list image directory {}", self.image_dir.display())
                })
            }
        };

        let mut images = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read image directory entry")?
        {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|ft| ft.is_file())
                .unwrap_or(false);
            if is_file && Self::is_managed_image(&path) {
                images.push(path);
            }
        }
        images.sort();
        Ok(images)
    }

    async fn write_text_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

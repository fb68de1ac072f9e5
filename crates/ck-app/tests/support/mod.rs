#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ck_app::{AppDeps, HistoryService, MonitorSettings};
use ck_core::ports::{ClipboardDevicePort, ClipboardDeviceError, FileStorePort, NotificationPort};
use ck_core::{ClipboardPayload, ImageFormat, ImagePayload};
use ck_infra::{Blake3Hasher, FilesystemFileStore, Timer};
use tempfile::TempDir;

/// In-memory clipboard that behaves like the OS one: writes replace content.
#[derive(Default)]
pub struct FakeClipboard {
    current: Mutex<Option<ClipboardPayload>>,
    writes: Mutex<Vec<ClipboardPayload>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl FakeClipboard {
    pub fn set(&self, payload: ClipboardPayload) {
        *self.current.lock().unwrap() = Some(payload);
    }

    pub fn set_text(&self, text: &str) {
        self.set(ClipboardPayload::Text(text.to_string()));
    }

    pub fn current(&self) -> Option<ClipboardPayload> {
        self.current.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<ClipboardPayload> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn write(&self, payload: ClipboardPayload) -> Result<(), ClipboardDeviceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClipboardDeviceError::Write("device busy".into()));
        }
        self.writes.lock().unwrap().push(payload.clone());
        *self.current.lock().unwrap() = Some(payload);
        Ok(())
    }
}

impl ClipboardDevicePort for FakeClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardDeviceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClipboardDeviceError::Read("device busy".into()));
        }
        Ok(match self.current.lock().unwrap().as_ref() {
            Some(ClipboardPayload::Text(text)) => Some(text.clone()),
            _ => None,
        })
    }

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardDeviceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClipboardDeviceError::Read("device busy".into()));
        }
        Ok(match self.current.lock().unwrap().as_ref() {
            Some(ClipboardPayload::Image(image)) => Some(image.clone()),
            _ => None,
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardDeviceError> {
        self.write(ClipboardPayload::Text(text.to_string()))
    }

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardDeviceError> {
        self.write(ClipboardPayload::Image(image.clone()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    labels: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn labels(&self) -> Vec<String> {
        self.labels.lock().unwrap().clone()
    }
}

impl NotificationPort for RecordingNotifier {
    fn on_new_entry(&self, label: &str) {
        self.labels.lock().unwrap().push(label.to_string());
    }
}

/// Wraps the filesystem store and can be told to fail image saves.
pub struct FlakyFileStore {
    inner: FilesystemFileStore,
    fail_saves: AtomicBool,
}

impl FlakyFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            inner: FilesystemFileStore::new(dir),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FileStorePort for FlakyFileStore {
    async fn save_image(&self, bytes: &[u8]) -> anyhow::Result<PathBuf> {
        if self.fail_saves.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.inner.save_image(bytes).await
    }

    async fn read_image(&self, path: &Path) -> anyhow::Result<Option<Vec<u8>>> {
        self.inner.read_image(path).await
    }

    async fn delete(&self, path: &Path) -> bool {
        self.inner.delete(path).await
    }

    async fn list_images(&self) -> anyhow::Result<Vec<PathBuf>> {
        self.inner.list_images().await
    }

    async fn write_text_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        self.inner.write_text_file(path, content).await
    }
}

pub fn png(width: u32, height: u32, fill: u8) -> ImagePayload {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend(std::iter::repeat(fill).take((width * height) as usize));
    ImagePayload {
        width,
        height,
        format: ImageFormat::Png,
        bytes,
    }
}

pub fn text(value: &str) -> ClipboardPayload {
    ClipboardPayload::Text(value.to_string())
}

pub struct Harness {
    pub clipboard: Arc<FakeClipboard>,
    pub notifier: Arc<RecordingNotifier>,
    pub file_store: Arc<FlakyFileStore>,
    pub service: HistoryService,
    pub dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(|_| {})
    }

    pub fn with(configure: impl FnOnce(&mut MonitorSettings)) -> Self {
        let dir = TempDir::new().unwrap();
        let mut settings = MonitorSettings {
            poll_interval: Duration::from_millis(1000),
            suppression_window: Duration::from_millis(100),
            enabled: true,
            image_dir: dir.path().join("images"),
            max_entries: None,
            cleanup_on_start: true,
        };
        configure(&mut settings);

        let clipboard = Arc::new(FakeClipboard::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let file_store = Arc::new(FlakyFileStore::new(settings.image_dir.clone()));
        let deps = AppDeps {
            clipboard: clipboard.clone(),
            hasher: Arc::new(Blake3Hasher),
            file_store: file_store.clone(),
            notifier: notifier.clone(),
            timer: Arc::new(Timer::new()),
        };

        Self {
            clipboard,
            notifier,
            file_store,
            service: HistoryService::new(deps, &settings),
            dir,
        }
    }

    pub async fn labels(&self) -> Vec<String> {
        self.service
            .snapshot()
            .await
            .iter()
            .map(|entry| entry.display_label().into_owned())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.service.snapshot().await.len()
    }
}

pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

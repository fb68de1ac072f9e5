//! Clipboard change detection.
//!
//! Both the push watcher and the poll ticker funnel into
//! [`ClipboardMonitor::ingest_current`], so there is one detection path and
//! one lock around [`MonitorState`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ck_core::ports::{
    ClipboardChangeHandler, ClipboardDevicePort, ContentHashPort, FileStorePort, NotificationPort,
    TimerPort, TimerTask,
};
use ck_core::{
    fingerprint, ChangeTrigger, ClipboardPayload, ContentHash, EntryId, HistoryEntry, ImageRef, MonitorPhase,
    MonitorState, Observation,
};
use tokio::sync::Mutex;
use tracing::{debug, info, trace, warn};

use crate::deps::AppDeps;
use crate::history::SharedHistory;
use crate::settings::MonitorSettings;
use crate::usecases::internal::discard_image_files;

pub const SUPPRESSION_TIMER_KEY: &str = "clipboard_monitor.suppression_reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyText,
    EmptyClipboard,
    Disabled,
}

/// Result of one detection pass. Every variant is non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Recorded(EntryId),
    Duplicate,
    Suppressed,
    Ignored(IgnoreReason),
    Dropped(String),
}

pub struct ClipboardMonitor {
    clipboard: Arc<dyn ClipboardDevicePort>,
    hasher: Arc<dyn ContentHashPort>,
    file_store: Arc<dyn FileStorePort>,
    notifier: Arc<dyn NotificationPort>,
    timer: Arc<dyn TimerPort>,
    history: SharedHistory,
    state: Arc<Mutex<MonitorState>>,
    enabled: AtomicBool,
    /// Bumped on every write-back; a reset only releases its own write.
    write_generation: Arc<AtomicU64>,
    suppression_window: Duration,
    max_entries: Option<usize>,
}

impl ClipboardMonitor {
    pub fn new(deps: &AppDeps, history: SharedHistory, settings: &MonitorSettings) -> Self {
        Self {
            clipboard: Arc::clone(&deps.clipboard),
            hasher: Arc::clone(&deps.hasher),
            file_store: Arc::clone(&deps.file_store),
            notifier: Arc::clone(&deps.notifier),
            timer: Arc::clone(&deps.timer),
            history,
            state: Arc::new(Mutex::new(MonitorState::new())),
            enabled: AtomicBool::new(settings.enabled),
            write_generation: Arc::new(AtomicU64::new(0)),
            suppression_window: settings.suppression_window,
            max_entries: settings.max_entries,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::SeqCst);
        if previous != enabled {
            info!(enabled, "clipboard monitoring toggled");
        }
    }

    pub async fn phase(&self) -> MonitorPhase {
        self.state.lock().await.phase()
    }

    pub async fn state(&self) -> MonitorState {
        self.state.lock().await.clone()
    }

    /// Read the clipboard device and ingest whatever it holds.
    pub async fn ingest_current(&self) -> IngestOutcome {
        if !self.is_enabled() {
            return IngestOutcome::Ignored(IgnoreReason::Disabled);
        }
        match self.clipboard.read_payload() {
            Ok(Some(payload)) => self.ingest(payload).await,
            Ok(None) => IngestOutcome::Ignored(IgnoreReason::EmptyClipboard),
            Err(err) => {
                warn!(error = %err, "failed to read clipboard");
                IngestOutcome::Dropped(err.to_string())
            }
        }
    }

    #[tracing::instrument(
        name = "usecase.clipboard_monitor.ingest",
        skip_all,
        fields(kind = payload.kind().as_str())
    )]
    pub async fn ingest(&self, payload: ClipboardPayload) -> IngestOutcome {
        if !self.is_enabled() {
            return IngestOutcome::Ignored(IgnoreReason::Disabled);
        }
        if let ClipboardPayload::Text(text) = &payload {
            if text.trim().is_empty() {
                return IngestOutcome::Ignored(IgnoreReason::EmptyText);
            }
        }

        let mut state = self.state.lock().await;
        if state.phase() == MonitorPhase::Suppressed {
            debug!("change ignored during write-back window");
            return IngestOutcome::Suppressed;
        }

        let kind = payload.kind();
        let hash = match fingerprint(&payload, self.hasher.as_ref()) {
            Ok(hash) => hash,
            Err(err) => {
                warn!(error = %err, "failed to fingerprint clipboard content");
                return IngestOutcome::Dropped(err.to_string());
            }
        };

        match state.observe(kind, &hash) {
            Observation::New => {}
            Observation::Duplicate => return IngestOutcome::Duplicate,
            Observation::Suppressed => return IngestOutcome::Suppressed,
        }

        let entry = match self.materialize(payload, hash.clone()).await {
            Ok(entry) => entry,
            Err(err) => {
                // hash stays unrecorded so the next detection retries
                warn!(error = %err, "failed to persist clipboard content");
                return IngestOutcome::Dropped(err.to_string());
            }
        };
        let entry_id = entry.id().clone();
        let label = entry.display_label().into_owned();

        let evicted = {
            let mut history = self.history.write().await;
            history.insert_head(entry);
            match self.max_entries {
                Some(max) => history.truncate_to(max),
                None => Vec::new(),
            }
        };
        state.record(kind, hash);
        drop(state);

        if !evicted.is_empty() {
            let deleted = discard_image_files(self.file_store.as_ref(), &evicted).await;
            debug!(evicted = evicted.len(), deleted, "history capacity reached");
        }

        info!(entry_id = %entry_id, label_chars = label.chars().count(), "clipboard entry recorded");
        self.notifier.on_new_entry(&label);
        IngestOutcome::Recorded(entry_id)
    }

    /// Write `payload` to the clipboard without recording it again.
    ///
    /// The monitor is suppressed for the duration of the write and for the
    /// configured window after it; the payload's fingerprint becomes the last
    /// seen hash so a late echo is still a duplicate.
    #[tracing::instrument(
        name = "usecase.clipboard_monitor.write_back",
        skip_all,
        fields(kind = payload.kind().as_str())
    )]
    pub async fn write_back(&self, payload: &ClipboardPayload) -> Result<()> {
        let hash = fingerprint(payload, self.hasher.as_ref())
            .context("Failed to fingerprint write-back content")?;

        let mut state = self.state.lock().await;
        let generation = self.write_generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.suppress();
        if let Err(err) = self.clipboard.write_payload(payload) {
            state.release();
            return Err(err).context("Failed to write clipboard");
        }
        state.record(payload.kind(), hash);
        drop(state);

        self.schedule_release(generation).await;
        debug!("write-back completed");
        Ok(())
    }

    async fn materialize(&self, payload: ClipboardPayload, hash: ContentHash) -> Result<HistoryEntry> {
        match payload {
            ClipboardPayload::Text(text) => Ok(HistoryEntry::text(text)),
            ClipboardPayload::Image(image) => {
                let path = self
                    .file_store
                    .save_image(&image.bytes)
                    .await
                    .context("Failed to save clipboard image")?;
                Ok(HistoryEntry::image(ImageRef {
                    path,
                    width: image.width,
                    height: image.height,
                    format: image.format,
                    fingerprint: hash,
                }))
            }
        }
    }

    async fn schedule_release(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.write_generation);
        let release: TimerTask = Box::pin(async move {
            let mut state = state.lock().await;
            if current.load(Ordering::SeqCst) == generation {
                state.release();
                debug!("write-back window closed");
            }
        });

        if let Err(err) = self
            .timer
            .start(SUPPRESSION_TIMER_KEY, self.suppression_window, release)
            .await
        {
            warn!(error = %err, "failed to schedule suppression reset, releasing now");
            let mut state = self.state.lock().await;
            if self.write_generation.load(Ordering::SeqCst) == generation {
                state.release();
            }
        }
    }
}

#[async_trait::async_trait]
impl ClipboardChangeHandler for ClipboardMonitor {
    async fn on_clipboard_changed(&self, trigger: ChangeTrigger) {
        match self.ingest_current().await {
            IngestOutcome::Recorded(entry_id) => {
                debug!(trigger = trigger.as_str(), entry_id = %entry_id, "change recorded")
            }
            IngestOutcome::Dropped(reason) => {
                warn!(trigger = trigger.as_str(), %reason, "change dropped")
            }
            other => trace!(trigger = trigger.as_str(), outcome = ?other, "change skipped"),
        }
    }

    fn set_monitoring(&self, enabled: bool) {
        self.set_enabled(enabled);
    }
}

//! Dependency wiring: picks the concrete adapters for every port and
//! assembles the service and the detection runtime.

use std::sync::Arc;

use ck_app::{AppDeps, HistoryService, MonitorSettings};
use ck_core::ports::{ClipboardChangeSourcePort, ClipboardDevicePort, NotificationPort};
use ck_infra::{Blake3Hasher, FilesystemFileStore, Timer};
use ck_platform::{
    command_channel, ClipboardChangeWatcher, ClipboardRuntime, RuntimeCommandSender,
    SystemClipboard, UnavailableClipboard,
};
use tracing::{info, warn};

pub struct WiredApp {
    pub service: Arc<HistoryService>,
    /// `None` in degraded mode: no clipboard, nothing to watch.
    pub runtime: Option<(ClipboardRuntime, RuntimeCommandSender)>,
}

/// Opens the system clipboard, falling back to a device that reports itself
/// unavailable so history management keeps working.
fn open_clipboard() -> (Arc<dyn ClipboardDevicePort>, bool) {
    match SystemClipboard::new() {
        Ok(clipboard) => (Arc::new(clipboard), true),
        Err(err) => {
            warn!(error = %err, "system clipboard unavailable, monitoring disabled");
            (Arc::new(UnavailableClipboard::new(err.to_string())), false)
        }
    }
}

pub fn wire_dependencies(
    settings: &MonitorSettings,
    notifier: Arc<dyn NotificationPort>,
) -> WiredApp {
    let (clipboard, available) = open_clipboard();
    let service = build_service(settings, notifier, clipboard);

    let runtime = if available {
        let watcher: Box<dyn ClipboardChangeSourcePort> = Box::new(ClipboardChangeWatcher::new());
        Some(build_runtime(&service, settings, Some(watcher)))
    } else {
        info!("running without clipboard detection");
        None
    };

    WiredApp { service, runtime }
}

pub fn build_service(
    settings: &MonitorSettings,
    notifier: Arc<dyn NotificationPort>,
    clipboard: Arc<dyn ClipboardDevicePort>,
) -> Arc<HistoryService> {
    let deps = AppDeps {
        clipboard,
        hasher: Arc::new(Blake3Hasher),
        file_store: Arc::new(FilesystemFileStore::new(settings.image_dir.clone())),
        notifier,
        timer: Arc::new(Timer::new()),
    };
    Arc::new(HistoryService::new(deps, settings))
}

/// Without a change source the runtime polls only.
pub fn build_runtime(
    service: &HistoryService,
    settings: &MonitorSettings,
    change_source: Option<Box<dyn ClipboardChangeSourcePort>>,
) -> (ClipboardRuntime, RuntimeCommandSender) {
    let (command_tx, command_rx) = command_channel();
    let runtime = ClipboardRuntime::new(
        service.monitor(),
        change_source,
        settings.poll_interval,
        command_rx,
    );
    (runtime, command_tx)
}

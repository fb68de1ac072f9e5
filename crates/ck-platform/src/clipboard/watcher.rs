use ck_core::ports::{ClipboardChangeSourcePort, WatcherError};
use ck_core::ClipboardChanged;
use clipboard_rs::{
    ClipboardHandler, ClipboardWatcher as RSClipboardWatcher, ClipboardWatcherContext,
    WatcherShutdown,
};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Forwards OS change callbacks into the runtime's channel.
struct ChangeForwarder {
    sender: mpsc::Sender<ClipboardChanged>,
}

impl ClipboardHandler for ChangeForwarder {
    fn on_clipboard_change(&mut self) {
        match self.sender.try_send(ClipboardChanged::now()) {
            Ok(()) => {}
            // a signal is already queued; the monitor re-reads the device anyway
            Err(TrySendError::Full(_)) => debug!("clipboard change coalesced"),
            Err(TrySendError::Closed(_)) => debug!("clipboard change after runtime stopped"),
        }
    }
}

/// Push notifications from `clipboard-rs`, watched on a blocking thread.
#[derive(Default)]
pub struct ClipboardChangeWatcher {
    shutdown: Option<WatcherShutdown>,
    join: Option<JoinHandle<()>>,
}

impl ClipboardChangeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.shutdown.is_some()
    }
}

impl ClipboardChangeSourcePort for ClipboardChangeWatcher {
    fn start(&mut self, tx: mpsc::Sender<ClipboardChanged>) -> Result<(), WatcherError> {
        if self.is_running() {
            return Err(WatcherError::AlreadyRunning);
        }

        let mut watcher_ctx: ClipboardWatcherContext<ChangeForwarder> =
            ClipboardWatcherContext::new().map_err(|e| WatcherError::Create(e.to_string()))?;
        let shutdown = watcher_ctx
            .add_handler(ChangeForwarder { sender: tx })
            .get_shutdown_channel();

        let join = tokio::task::spawn_blocking(move || {
            info!("clipboard watch started");
            watcher_ctx.start_watch();
            info!("clipboard watch stopped");
        });

        self.shutdown = Some(shutdown);
        self.join = Some(join);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.stop();
            debug!("clipboard watcher stop requested");
        }
        self.join = None;
    }
}

use std::sync::Arc;
use std::time::Duration;

use ck_core::ports::{ClipboardChangeHandler, ClipboardChangeSourcePort};
use ck_core::ChangeTrigger;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::event_bus::{RuntimeCommand, RuntimeCommandReceiver};

const CHANGE_CHANNEL_CAPACITY: usize = 1;

/// Single owner of clipboard detection.
///
/// Push notifications and the poll ticker are multiplexed in one task, so
/// the handler is never invoked concurrently by the two triggers.
pub struct ClipboardRuntime {
    handler: Arc<dyn ClipboardChangeHandler>,
    change_source: Option<Box<dyn ClipboardChangeSourcePort>>,
    poll_interval: Duration,
    command_rx: RuntimeCommandReceiver,
}

impl ClipboardRuntime {
    pub fn new(
        handler: Arc<dyn ClipboardChangeHandler>,
        change_source: Option<Box<dyn ClipboardChangeSourcePort>>,
        poll_interval: Duration,
        command_rx: RuntimeCommandReceiver,
    ) -> Self {
        Self {
            handler,
            change_source,
            poll_interval,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        // held for the whole loop so the receiver never reports closed
        let (change_tx, mut change_rx) = mpsc::channel(CHANGE_CHANNEL_CAPACITY);
        let push_enabled = self.start_change_source(change_tx.clone());

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            push_enabled,
            "clipboard runtime started"
        );

        loop {
            tokio::select! {
                Some(_) = change_rx.recv() => {
                    self.handler.on_clipboard_changed(ChangeTrigger::Push).await;
                }
                _ = ticker.tick() => {
                    self.handler.on_clipboard_changed(ChangeTrigger::Poll).await;
                }
                command = self.command_rx.recv() => {
                    if !self.handle_command(command) {
                        break;
                    }
                }
            }
        }

        if let Some(source) = self.change_source.as_mut() {
            source.stop();
        }
        drop(change_tx);
        info!("clipboard runtime stopped");
    }

    fn start_change_source(&mut self, tx: mpsc::Sender<ck_core::ClipboardChanged>) -> bool {
        let Some(source) = self.change_source.as_mut() else {
            debug!("no change notification source, polling only");
            return false;
        };
        match source.start(tx) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "clipboard change notifications unavailable, polling only");
                false
            }
        }
    }

    /// Returns `false` when the loop should stop.
    fn handle_command(&self, command: Option<RuntimeCommand>) -> bool {
        match command {
            Some(RuntimeCommand::PauseMonitoring) => {
                self.handler.set_monitoring(false);
                true
            }
            Some(RuntimeCommand::ResumeMonitoring) => {
                self.handler.set_monitoring(true);
                true
            }
            Some(RuntimeCommand::Shutdown) => {
                info!("clipboard runtime shutting down");
                false
            }
            None => {
                debug!("command channel closed");
                false
            }
        }
    }
}

//! Line-oriented display surface over [`HistoryService`].
//!
//! Entry numbers always refer to the list as currently visible, so a
//! search narrows what `select`, `delete` and `edit` address.

mod command;
mod notifier;
mod render;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use ck_app::{ActivateOutcome, ClipboardMonitor, HistoryService};
use ck_core::{EditOutcome, EntryId, HistoryEntry};
use ck_platform::{RuntimeCommand, RuntimeCommandSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub use command::{CommandParseError, ConsoleCommand};
pub use notifier::ConsoleNotifier;
pub use render::entry_line;

/// Pauses and resumes monitoring through the runtime when one is running,
/// or directly on the monitor otherwise.
pub struct MonitorControl {
    monitor: Arc<ClipboardMonitor>,
    commands: Option<RuntimeCommandSender>,
}

impl MonitorControl {
    pub fn new(monitor: Arc<ClipboardMonitor>, commands: Option<RuntimeCommandSender>) -> Self {
        Self { monitor, commands }
    }

    async fn set_enabled(&self, enabled: bool) {
        let command = if enabled {
            RuntimeCommand::ResumeMonitoring
        } else {
            RuntimeCommand::PauseMonitoring
        };
        if let Some(tx) = &self.commands {
            if tx.send(command).await.is_ok() {
                return;
            }
            warn!(?command, "runtime is gone, toggling monitor directly");
        }
        self.monitor.set_enabled(enabled);
    }
}

pub struct Console<R, W> {
    service: Arc<HistoryService>,
    control: MonitorControl,
    notifications: mpsc::UnboundedReceiver<String>,
    lines: Lines<R>,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        service: Arc<HistoryService>,
        control: MonitorControl,
        notifications: mpsc::UnboundedReceiver<String>,
        reader: R,
        writer: W,
    ) -> Self {
        Self {
            service,
            control,
            notifications,
            lines: reader.lines(),
            writer,
        }
    }

    /// Runs until `quit`, end of input, or `shutdown` resolves.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) -> Result<()> {
        tokio::pin!(shutdown);
        self.write_line("clipkeep ready, type `help` for commands").await?;

        loop {
            // next_line keeps partial input buffered when another branch wins
            tokio::select! {
                line = self.lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("console input closed");
                        break;
                    };
                    if !self.handle_line(&line).await? {
                        break;
                    }
                }
                Some(label) = self.notifications.recv() => {
                    let row = format!("+ {}", render::flatten_and_truncate(&label));
                    self.write_line(&row).await?;
                }
                _ = &mut shutdown => {
                    debug!("console interrupted");
                    break;
                }
            }
        }

        self.writer.flush().await?;
        Ok(())
    }

    /// Returns `false` when the console should exit.
    async fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match ConsoleCommand::parse(line) {
            Ok(command) => command,
            Err(CommandParseError::Empty) => return Ok(true),
            Err(err) => {
                self.write_line(&format!("error: {err}")).await?;
                return Ok(true);
            }
        };

        match command {
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::Help => self.write_line(render::HELP).await?,
            ConsoleCommand::List(None) => {
                let entries = self.service.visible_entries().await;
                self.print_entries(&entries).await?;
            }
            ConsoleCommand::List(Some(query)) | ConsoleCommand::Search(query) => {
                let entries = self.service.search_text_changed(query).await;
                self.print_entries(&entries).await?;
            }
            ConsoleCommand::Select(indices) => {
                let Some(ids) = self.resolve(&indices).await? else {
                    return Ok(true);
                };
                let message = match self.service.select(&ids).await {
                    ActivateOutcome::Written => "copied to clipboard".to_string(),
                    ActivateOutcome::NotFound => "entry no longer exists".to_string(),
                    ActivateOutcome::MissingImageFile => "image file is missing".to_string(),
                    ActivateOutcome::DeviceError(err) => format!("clipboard error: {err}"),
                };
                self.write_line(&message).await?;
            }
            ConsoleCommand::Delete(indices) => {
                let Some(ids) = self.resolve(&indices).await? else {
                    return Ok(true);
                };
                let removed = self.service.delete(&ids).await;
                self.write_line(&format!("deleted {removed} entries")).await?;
            }
            ConsoleCommand::Edit { index, text } => {
                let Some(ids) = self.resolve(&[index]).await? else {
                    return Ok(true);
                };
                let message = match self.service.edit(&ids[0], text).await {
                    EditOutcome::Applied => "entry updated",
                    EditOutcome::NotFound => "entry no longer exists",
                    EditOutcome::RejectedImage => "image entries cannot be edited",
                    EditOutcome::RejectedEmpty => "text must not be empty",
                };
                self.write_line(message).await?;
            }
            ConsoleCommand::Clear => {
                let removed = self.service.clear().await;
                self.write_line(&format!("cleared {removed} entries")).await?;
            }
            ConsoleCommand::Export(path) => {
                let message = match self.service.export(&path).await {
                    Ok(count) => format!("exported {count} entries to {}", path.display()),
                    Err(err) => format!("export failed: {err:#}"),
                };
                self.write_line(&message).await?;
            }
            ConsoleCommand::Pause => {
                self.control.set_enabled(false).await;
                self.write_line("monitoring paused").await?;
            }
            ConsoleCommand::Resume => {
                self.control.set_enabled(true).await;
                self.write_line("monitoring resumed").await?;
            }
        }
        Ok(true)
    }

    /// Maps 1-based numbers onto the visible list. Prints an error and
    /// returns `None` if any number is out of range.
    async fn resolve(&mut self, indices: &[usize]) -> Result<Option<Vec<EntryId>>> {
        let visible = self.service.visible_entries().await;
        let mut ids = Vec::with_capacity(indices.len());
        for &index in indices {
            match visible.get(index - 1) {
                Some(entry) => ids.push(entry.id().clone()),
                None => {
                    self.write_line(&format!("error: no entry {index}")).await?;
                    return Ok(None);
                }
            }
        }
        Ok(Some(ids))
    }

    async fn print_entries(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        if entries.is_empty() {
            return self.write_line("(no entries)").await;
        }
        for (position, entry) in entries.iter().enumerate() {
            self.write_line(&entry_line(position + 1, entry)).await?;
        }
        Ok(())
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

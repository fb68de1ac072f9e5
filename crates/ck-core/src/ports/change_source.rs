use tokio::sync::mpsc;

use super::WatcherError;
use crate::clipboard::ClipboardChanged;

/// Push notifications for clipboard changes.
///
/// Implementations forward OS change events into `tx` until [`stop`] is
/// called. Polling keeps working when no source is available.
///
/// [`stop`]: ClipboardChangeSourcePort::stop
pub trait ClipboardChangeSourcePort: Send {
    fn start(&mut self, tx: mpsc::Sender<ClipboardChanged>) -> Result<(), WatcherError>;

    fn stop(&mut self);
}

use ck_core::ports::NotificationPort;
use tokio::sync::mpsc;

/// Forwards new-entry labels to the console loop, which prints them between
/// command outputs.
pub struct ConsoleNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ConsoleNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationPort for ConsoleNotifier {
    fn on_new_entry(&self, label: &str) {
        // receiver is gone once the console has exited
        let _ = self.tx.send(label.to_string());
    }
}

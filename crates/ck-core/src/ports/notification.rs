/// Receives a short label whenever a new entry lands in the history.
pub trait NotificationPort: Send + Sync {
    fn on_new_entry(&self, label: &str);
}

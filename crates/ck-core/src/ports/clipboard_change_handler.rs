//! Clipboard change handler port
//!
//! The platform runtime (low level) calls this abstraction; the application
//! layer implements it.

use crate::clipboard::ChangeTrigger;

#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// The clipboard may have changed. Implementations re-read the device.
    async fn on_clipboard_changed(&self, trigger: ChangeTrigger);

    fn set_monitoring(&self, enabled: bool);
}

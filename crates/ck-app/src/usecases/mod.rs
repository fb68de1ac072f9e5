pub mod clipboard;
pub mod history;
mod internal;

pub use clipboard::{ActivateEntry, ActivateOutcome, ClipboardMonitor, IgnoreReason, IngestOutcome};
pub use history::{
    CleanupStaleImages, ClearHistory, DeleteEntries, EditTextEntry, ExportHistory, SearchHistory,
};

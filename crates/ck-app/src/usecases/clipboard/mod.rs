mod activate_entry;
mod monitor;

pub use activate_entry::{ActivateEntry, ActivateOutcome};
pub use monitor::{ClipboardMonitor, IgnoreReason, IngestOutcome, SUPPRESSION_TIMER_KEY};

mod change;
mod entry;
mod hash;
mod payload;

pub use change::{ChangeTrigger, ClipboardChanged};
pub use entry::{EntryContent, HistoryEntry, ImageRef};
pub use hash::{fingerprint, ContentHash, HashAlgorithm};
pub use payload::{ClipboardPayload, ContentKind, ImageFormat, ImagePayload};

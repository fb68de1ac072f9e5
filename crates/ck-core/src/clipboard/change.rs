use std::time::Instant;

/// Signal raised by a push watcher when the OS reports a clipboard change.
///
/// Carries no content: the monitor always re-reads the device, so a
/// spurious or coalesced signal is harmless.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardChanged {
    pub observed_at: Instant,
}

impl ClipboardChanged {
    pub fn now() -> Self {
        Self {
            observed_at: Instant::now(),
        }
    }
}

/// What prompted a detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTrigger {
    Push,
    Poll,
}

impl ChangeTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeTrigger::Push => "push",
            ChangeTrigger::Poll => "poll",
        }
    }
}

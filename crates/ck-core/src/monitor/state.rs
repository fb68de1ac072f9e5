use crate::clipboard::{ContentHash, ContentKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorPhase {
    Idle,
    /// A write-back is in flight or its window has not closed yet.
    Suppressed,
}

/// What the monitor should do with a freshly fingerprinted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    New,
    Duplicate,
    Suppressed,
}

/// Duplicate-detection and suppression state owned by the clipboard monitor.
///
/// Text and image hashes are kept in separate slots; a text change never
/// clears the image hash and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    last_text_hash: Option<ContentHash>,
    last_image_hash: Option<ContentHash>,
    suppressed: bool,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MonitorPhase {
        if self.suppressed {
            MonitorPhase::Suppressed
        } else {
            MonitorPhase::Idle
        }
    }

    pub fn observe(&self, kind: ContentKind, hash: &ContentHash) -> Observation {
        if self.suppressed {
            return Observation::Suppressed;
        }
        if self.last_hash(kind) == Some(hash) {
            Observation::Duplicate
        } else {
            Observation::New
        }
    }

    pub fn record(&mut self, kind: ContentKind, hash: ContentHash) {
        match kind {
            ContentKind::Text => self.last_text_hash = Some(hash),
            ContentKind::Image => self.last_image_hash = Some(hash),
        }
    }

    pub fn last_hash(&self, kind: ContentKind) -> Option<&ContentHash> {
        match kind {
            ContentKind::Text => self.last_text_hash.as_ref(),
            ContentKind::Image => self.last_image_hash.as_ref(),
        }
    }

    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    pub fn release(&mut self) {
        self.suppressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashAlgorithm;

    fn hash(byte: u8) -> ContentHash {
        ContentHash {
            alg: HashAlgorithm::Blake3V1,
            bytes: [byte; 32],
        }
    }

    #[test]
    fn starts_idle_with_no_hashes() {
        let state = MonitorState::new();
        assert_eq!(state.phase(), MonitorPhase::Idle);
        assert_eq!(state.observe(ContentKind::Text, &hash(1)), Observation::New);
    }

    #[test]
    fn recorded_hash_is_duplicate_for_same_kind_only() {
        let mut state = MonitorState::new();
        state.record(ContentKind::Text, hash(1));

        assert_eq!(
            state.observe(ContentKind::Text, &hash(1)),
            Observation::Duplicate
        );
        assert_eq!(state.observe(ContentKind::Image, &hash(1)), Observation::New);
        assert_eq!(state.observe(ContentKind::Text, &hash(2)), Observation::New);
    }

    #[test]
    fn slots_are_independent() {
        let mut state = MonitorState::new();
        state.record(ContentKind::Image, hash(9));
        state.record(ContentKind::Text, hash(1));
        state.record(ContentKind::Text, hash(2));

        assert_eq!(state.last_hash(ContentKind::Image), Some(&hash(9)));
        assert_eq!(state.last_hash(ContentKind::Text), Some(&hash(2)));
    }

    #[test]
    fn suppression_wins_over_new_content() {
        let mut state = MonitorState::new();
        state.suppress();
        assert_eq!(state.phase(), MonitorPhase::Suppressed);
        assert_eq!(
            state.observe(ContentKind::Text, &hash(5)),
            Observation::Suppressed
        );

        state.release();
        assert_eq!(state.phase(), MonitorPhase::Idle);
        assert_eq!(state.observe(ContentKind::Text, &hash(5)), Observation::New);
    }
}

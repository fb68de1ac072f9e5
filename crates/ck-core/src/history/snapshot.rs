use std::collections::vec_deque;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::clipboard::HistoryEntry;
use crate::ids::EntryId;

/// Immutable view of the history at one point in time, newest first.
///
/// Cloning is cheap and iteration can be restarted any number of times.
#[derive(Debug, Clone, Default)]
pub struct HistorySnapshot {
    entries: Arc<VecDeque<HistoryEntry>>,
}

impl HistorySnapshot {
    pub(crate) fn new(entries: Arc<VecDeque<HistoryEntry>>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a HistorySnapshot {
    type Item = &'a HistoryEntry;
    type IntoIter = vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

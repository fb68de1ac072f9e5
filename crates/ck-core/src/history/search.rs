use super::HistorySnapshot;
use crate::clipboard::{EntryContent, HistoryEntry};

/// Entries whose label contains `query`, case-insensitively, in store order.
///
/// The query is used as typed: no trimming. An empty query matches all.
pub fn filter(query: &str, snapshot: &HistorySnapshot) -> Vec<HistoryEntry> {
    if query.is_empty() {
        return snapshot.to_vec();
    }
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|entry| matches_query(entry, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_query(entry: &HistoryEntry, needle: &str) -> bool {
    if entry.display_label().to_lowercase().contains(needle) {
        return true;
    }
    match entry.content() {
        EntryContent::Image(image) => image
            .path
            .to_string_lossy()
            .to_lowercase()
            .contains(needle),
        EntryContent::Text(_) => false,
    }
}

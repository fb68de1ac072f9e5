use std::collections::VecDeque;
use std::sync::Arc;

use super::HistorySnapshot;
use crate::clipboard::{EntryContent, HistoryEntry};
use crate::ids::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    NotFound,
    RejectedImage,
    RejectedEmpty,
}

/// Newest-first list of captured entries.
///
/// Mutations copy the buffer only while a snapshot still references it.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Arc<VecDeque<HistoryEntry>>,
    next_order: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head and stamp the insertion order.
    pub fn insert_head(&mut self, mut entry: HistoryEntry) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        entry.set_created_order(order);
        Arc::make_mut(&mut self.entries).push_front(entry);
        order
    }

    pub fn remove(&mut self, id: &EntryId) -> Option<HistoryEntry> {
        let position = self.position(id)?;
        Arc::make_mut(&mut self.entries).remove(position)
    }

    /// Remove every entry and hand them back so callers can release
    /// backing files. Insertion order keeps counting from where it was.
    pub fn clear(&mut self) -> Vec<HistoryEntry> {
        let previous = std::mem::take(&mut self.entries);
        match Arc::try_unwrap(previous) {
            Ok(entries) => entries.into(),
            Err(shared) => shared.iter().cloned().collect(),
        }
    }

    pub fn edit_text(&mut self, id: &EntryId, new_text: String) -> EditOutcome {
        let Some(position) = self.position(id) else {
            return EditOutcome::NotFound;
        };
        if matches!(self.entries[position].content(), EntryContent::Image(_)) {
            return EditOutcome::RejectedImage;
        }
        if new_text.is_empty() {
            return EditOutcome::RejectedEmpty;
        }
        Arc::make_mut(&mut self.entries)[position].replace_text(new_text);
        EditOutcome::Applied
    }

    /// Drop entries beyond `max`, oldest first.
    pub fn truncate_to(&mut self, max: usize) -> Vec<HistoryEntry> {
        if self.entries.len() <= max {
            return Vec::new();
        }
        Arc::make_mut(&mut self.entries).split_off(max).into()
    }

    pub fn get(&self, id: &EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn iterate(&self) -> HistorySnapshot {
        HistorySnapshot::new(Arc::clone(&self.entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentHash, HashAlgorithm, ImageFormat, ImageRef};
    use std::path::PathBuf;

    fn image_entry(name: &str) -> HistoryEntry {
        HistoryEntry::image(ImageRef {
            path: PathBuf::from(format!("/tmp/{name}.png")),
            width: 1,
            height: 1,
            format: ImageFormat::Png,
            fingerprint: ContentHash {
                alg: HashAlgorithm::Blake3V1,
                bytes: [1; 32],
            },
        })
    }

    fn labels(store: &HistoryStore) -> Vec<String> {
        store
            .iterate()
            .iter()
            .map(|e| e.display_label().into_owned())
            .collect()
    }

    #[test]
    fn insert_head_puts_newest_first() {
        let mut store = HistoryStore::new();
        store.insert_head(HistoryEntry::text("a"));
        store.insert_head(HistoryEntry::text("b"));
        store.insert_head(HistoryEntry::text("c"));

        assert_eq!(labels(&store), vec!["c", "b", "a"]);
        let orders: Vec<u64> = store.iterate().iter().map(|e| e.created_order()).collect();
        assert_eq!(orders, vec![2, 1, 0]);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut store = HistoryStore::new();
        store.insert_head(HistoryEntry::text("a"));
        let snapshot = store.iterate();

        store.insert_head(HistoryEntry::text("b"));
        store.clear();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.iter().count(), 1);
        // restartable
        assert_eq!(snapshot.iter().count(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_returns_entry_and_keeps_order_of_rest() {
        let mut store = HistoryStore::new();
        store.insert_head(HistoryEntry::text("a"));
        let middle = HistoryEntry::text("b");
        let middle_id = middle.id().clone();
        store.insert_head(middle);
        store.insert_head(HistoryEntry::text("c"));

        let removed = store.remove(&middle_id).expect("entry present");
        assert_eq!(removed.text_content(), Some("b"));
        assert_eq!(labels(&store), vec!["c", "a"]);
        assert!(store.remove(&middle_id).is_none());
    }

    #[test]
    fn clear_returns_all_and_order_keeps_counting() {
        let mut store = HistoryStore::new();
        store.insert_head(HistoryEntry::text("a"));
        store.insert_head(image_entry("img"));

        let cleared = store.clear();
        assert_eq!(cleared.len(), 2);
        assert!(store.is_empty());

        let order = store.insert_head(HistoryEntry::text("after"));
        assert_eq!(order, 2);
    }

    #[test]
    fn clear_while_snapshot_is_held_copies_entries() {
        let mut store = HistoryStore::new();
        store.insert_head(HistoryEntry::text("a"));
        let snapshot = store.iterate();

        let cleared = store.clear();
        assert_eq!(cleared.len(), 1);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn edit_text_keeps_identity_and_position() {
        let mut store = HistoryStore::new();
        let entry = HistoryEntry::text("old");
        let id = entry.id().clone();
        store.insert_head(entry);
        store.insert_head(HistoryEntry::text("newer"));

        assert_eq!(store.edit_text(&id, "new".into()), EditOutcome::Applied);
        let edited = store.get(&id).unwrap();
        assert_eq!(edited.text_content(), Some("new"));
        assert_eq!(edited.created_order(), 0);
        assert_eq!(labels(&store), vec!["newer", "new"]);
    }

    #[test]
    fn edit_text_rejects_images_empty_and_unknown() {
        let mut store = HistoryStore::new();
        let image = image_entry("img");
        let image_id = image.id().clone();
        store.insert_head(image);
        let text = HistoryEntry::text("keep");
        let text_id = text.id().clone();
        store.insert_head(text);

        assert_eq!(
            store.edit_text(&image_id, "x".into()),
            EditOutcome::RejectedImage
        );
        assert_eq!(
            store.edit_text(&text_id, String::new()),
            EditOutcome::RejectedEmpty
        );
        assert_eq!(
            store.edit_text(&EntryId::new(), "x".into()),
            EditOutcome::NotFound
        );
        assert_eq!(store.get(&text_id).unwrap().text_content(), Some("keep"));
    }

    #[test]
    fn truncate_to_drops_oldest() {
        let mut store = HistoryStore::new();
        for label in ["a", "b", "c", "d"] {
            store.insert_head(HistoryEntry::text(label));
        }

        let evicted = store.truncate_to(2);
        assert_eq!(labels(&store), vec!["d", "c"]);
        let evicted: Vec<_> = evicted.iter().map(|e| e.display_label().into_owned()).collect();
        assert_eq!(evicted, vec!["b", "a"]);
        assert!(store.truncate_to(5).is_empty());
    }
}

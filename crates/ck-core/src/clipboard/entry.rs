use std::borrow::Cow;
use std::path::PathBuf;

use super::{ContentHash, ContentKind, ImageFormat};
use crate::ids::EntryId;

/// Reference to an image persisted by the file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub fingerprint: ContentHash,
}

impl ImageRef {
    /// File name of the backing image, used as the visible label.
    pub fn label(&self) -> Cow<'_, str> {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.path.to_string_lossy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Text(String),
    Image(ImageRef),
}

/// One captured clipboard item.
///
/// `created_order` is assigned by [`crate::HistoryStore`] on insertion and
/// never changes afterwards, even when the text is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    id: EntryId,
    created_order: u64,
    content: EntryContent,
}

impl HistoryEntry {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            created_order: 0,
            content: EntryContent::Text(text.into()),
        }
    }

    pub fn image(image: ImageRef) -> Self {
        Self {
            id: EntryId::new(),
            created_order: 0,
            content: EntryContent::Image(image),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn created_order(&self) -> u64 {
        self.created_order
    }

    pub fn content(&self) -> &EntryContent {
        &self.content
    }

    pub fn kind(&self) -> ContentKind {
        match self.content {
            EntryContent::Text(_) => ContentKind::Text,
            EntryContent::Image(_) => ContentKind::Image,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            EntryContent::Text(text) => Some(text),
            EntryContent::Image(_) => None,
        }
    }

    pub fn image_ref(&self) -> Option<&ImageRef> {
        match &self.content {
            EntryContent::Image(image) => Some(image),
            EntryContent::Text(_) => None,
        }
    }

    /// Text shown to the user for this entry.
    pub fn display_label(&self) -> Cow<'_, str> {
        match &self.content {
            EntryContent::Text(text) => Cow::Borrowed(text),
            EntryContent::Image(image) => image.label(),
        }
    }

    pub(crate) fn set_created_order(&mut self, order: u64) {
        self.created_order = order;
    }

    pub(crate) fn replace_text(&mut self, text: String) {
        self.content = EntryContent::Text(text);
    }
}

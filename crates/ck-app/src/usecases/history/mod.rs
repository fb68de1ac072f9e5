mod cleanup_stale_images;
mod clear_history;
mod delete_entries;
mod edit_text_entry;
mod export_history;
mod search_history;

pub use cleanup_stale_images::CleanupStaleImages;
pub use clear_history::ClearHistory;
pub use delete_entries::DeleteEntries;
pub use edit_text_entry::EditTextEntry;
pub use export_history::ExportHistory;
pub use search_history::SearchHistory;

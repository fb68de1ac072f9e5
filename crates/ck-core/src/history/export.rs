use super::HistorySnapshot;
use crate::clipboard::EntryContent;

/// Render the history as export text: one item per line, newest first,
/// every item terminated by `\n`.
pub fn render_export(snapshot: &HistorySnapshot) -> String {
    let mut out = String::new();
    for entry in snapshot {
        match entry.content() {
            EntryContent::Text(text) => out.push_str(text),
            EntryContent::Image(image) => {
                out.push_str("[Image] ");
                out.push_str(&image.path.to_string_lossy());
            }
        }
        out.push('\n');
    }
    out
}

use ck_core::{ContentKind, HistoryEntry};

const MAX_LABEL_CHARS: usize = 72;

/// Single-line label for a list row.
pub fn entry_line(index: usize, entry: &HistoryEntry) -> String {
    let tag = match entry.kind() {
        ContentKind::Text => "text ",
        ContentKind::Image => "image",
    };
    format!("{index:>3}. [{tag}] {}", flatten_and_truncate(&entry.display_label()))
}

pub fn flatten_and_truncate(label: &str) -> String {
    truncate(&flatten(label))
}

fn flatten(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            '\n' => '↵',
            '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

pub const HELP: &str = "\
commands:
  list [text]          show the history, optionally filtered like `search`
  search [text]        filter the history, no text clears the filter
  select <n>[,<n>...]  put entries back on the clipboard
  delete <n>[,<n>...]  remove entries
  edit <n> <text>      replace the text of an entry
  clear                remove every entry
  export <path>        write the history to a text file
  pause | resume       stop or restart clipboard monitoring
  quit                 exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_are_cut() {
        let long = "x".repeat(200);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_LABEL_CHARS);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn newlines_stay_visible() {
        assert_eq!(flatten("a\nb\tc"), "a↵b c");
    }

    #[test]
    fn text_row_has_index_and_tag() {
        let entry = HistoryEntry::text("hello");
        assert_eq!(entry_line(1, &entry), "  1. [text ] hello");
    }
}

use crate::config::ServerEntry;
use crate::render;
use crate::section::{Document, collapse_blank_lines};

/// Merge `entries` into the existing Codex config text.
///
/// Every table previously written for one of `entries` is removed, blank-line runs are
/// collapsed, and freshly rendered tables are appended in source order. Tables for
/// servers that are not in `entries` are left alone, as is everything else.
pub fn merge(existing: &str, entries: &[ServerEntry]) -> String {
    let cleaned = remove_servers(existing, entries);
    let blocks = render::render_entries(entries);

    if cleaned.is_empty() {
        format!("{blocks}\n")
    } else {
        format!("{cleaned}\n\n{blocks}\n")
    }
}

/// Remove the tables for `entries` and normalize whitespace. The result has no leading
/// or trailing whitespace and at most one blank line in a row.
pub fn remove_servers(existing: &str, entries: &[ServerEntry]) -> String {
    let mut doc = Document::parse(existing);
    for entry in entries {
        doc.remove(&entry.header());
    }
    collapse_blank_lines(&doc.render()).trim().to_string()
}

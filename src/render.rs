use crate::config::{ServerEntry, is_reserved};
use serde_json::Value;
use std::borrow::Cow;

/// Render one server as a Codex table.
///
/// Attributes keep their source order. Strings become `key = "value"`, arrays become
/// `key = ["a", "b"]` and objects become one dotted `key.inner = "value"` line per
/// inner key. Reserved keys and other scalar types produce no output. Values are
/// inserted verbatim between the quotes, without escaping.
pub fn render_entry(entry: &ServerEntry) -> String {
    let mut lines = vec![entry.header()];

    for (key, value) in &entry.settings {
        if is_reserved(key) {
            continue;
        }
        match value {
            Value::String(s) => lines.push(format!("{key} = \"{s}\"")),
            Value::Array(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|item| format!("\"{}\"", value_text(item)))
                    .collect();
                lines.push(format!("{key} = [{}]", items.join(", ")));
            }
            Value::Object(table) => {
                for (inner, inner_value) in table {
                    lines.push(format!("{key}.{inner} = \"{}\"", value_text(inner_value)));
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    lines.join("\n")
}

/// Render all servers in order, separated by one blank line. No trailing newline.
pub fn render_entries(entries: &[ServerEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Text placed between quotes for a list element or inner table value. Strings are used
/// as-is; anything else falls back to its compact JSON form.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

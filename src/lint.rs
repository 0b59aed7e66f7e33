use crate::config::{NAMESPACE, ServerEntry, is_reserved, json_kind};
use crate::render::{render_entry, value_text};
use serde_json::Value;

/// Report problems the renderer will carry into the Codex config unchanged.
///
/// Nothing here alters the output of [`crate::merge::merge`]; values are still written
/// verbatim. The messages tell the user which source entries to fix.
pub fn check(entries: &[ServerEntry]) -> Vec<String> {
    let mut warnings = Vec::new();

    for entry in entries {
        let name = &entry.name;
        if !is_bare_key(name) {
            warnings.push(format!(
                "server name '{name}' is not a bare TOML key; [{NAMESPACE}.{name}] will not parse as intended"
            ));
        }

        for (key, value) in &entry.settings {
            if is_reserved(key) {
                continue;
            }
            if !is_bare_key(key) {
                warnings.push(format!("server '{name}': attribute name '{key}' is not a bare TOML key"));
            }
            match value {
                Value::String(s) => check_quoted(&mut warnings, name, key, s),
                Value::Array(items) => {
                    for item in items {
                        check_quoted(&mut warnings, name, key, &value_text(item));
                    }
                }
                Value::Object(table) => {
                    for (inner, inner_value) in table {
                        let path = format!("{key}.{inner}");
                        if !is_bare_key(inner) {
                            warnings.push(format!(
                                "server '{name}': key '{path}' is not a bare TOML key"
                            ));
                        }
                        check_quoted(&mut warnings, name, &path, &value_text(inner_value));
                    }
                }
                other => warnings.push(format!(
                    "server '{name}': attribute '{key}' is {} and was skipped",
                    json_kind(other)
                )),
            }
        }

        let block = render_entry(entry);
        if let Err(e) = toml::from_str::<toml::Table>(&block) {
            warnings.push(format!(
                "server '{name}': rendered table is not valid TOML: {}",
                e.message()
            ));
        }
    }

    warnings
}

fn check_quoted(warnings: &mut Vec<String>, name: &str, key: &str, text: &str) {
    if let Some(ch) = text.chars().find(|c| needs_escape(*c)) {
        warnings.push(format!(
            "server '{name}': value of '{key}' contains {} which is written unescaped",
            describe(ch)
        ));
    }
}

fn needs_escape(ch: char) -> bool {
    ch == '"' || ch == '\\' || ch.is_control()
}

fn describe(ch: char) -> String {
    match ch {
        '"' => "a double quote".to_string(),
        '\\' => "a backslash".to_string(),
        '\n' => "a newline".to_string(),
        other => format!("control character {:?}", other),
    }
}

/// TOML bare keys: ASCII letters, digits, `_` and `-`, at least one character.
pub fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, settings: Value) -> ServerEntry {
        let Value::Object(map) = settings else {
            panic!("expected object");
        };
        ServerEntry::new(name, map)
    }

    #[test]
    fn clean_entry_has_no_warnings() {
        let e = entry(
            "github",
            json!({"type": "stdio", "command": "npx", "args": ["-y", "server"], "env": {"TOKEN": "abc"}}),
        );
        assert!(check(&[e]).is_empty());
    }

    #[test]
    fn flags_embedded_quote() {
        let e = entry("q", json!({"command": "say \"hi\""}));
        let warnings = check(&[e]);
        assert!(warnings.iter().any(|w| w.contains("double quote")), "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("not valid TOML")), "{warnings:?}");
    }

    #[test]
    fn flags_newline_in_inner_value() {
        let e = entry("n", json!({"env": {"MULTI": "a\nb"}}));
        let warnings = check(&[e]);
        assert!(warnings.iter().any(|w| w.contains("env.MULTI") && w.contains("newline")));
    }

    #[test]
    fn flags_windows_path_backslash() {
        let e = entry("w", json!({"command": "C:\\tools\\srv.exe"}));
        let warnings = check(&[e]);
        assert!(warnings.iter().any(|w| w.contains("backslash")));
    }

    #[test]
    fn flags_non_bare_server_name() {
        let e = entry("my server", json!({"command": "x"}));
        let warnings = check(&[e]);
        assert!(warnings.iter().any(|w| w.contains("'my server'")));
    }

    #[test]
    fn flags_skipped_scalars() {
        let e = entry("s", json!({"command": "x", "timeout": 30}));
        let warnings = check(&[e]);
        assert_eq!(warnings, vec!["server 's': attribute 'timeout' is a number and was skipped"]);
    }

    #[test]
    fn reserved_key_is_never_reported() {
        let e = entry("r", json!({"type": 1, "url": "https://r"}));
        assert!(check(&[e]).is_empty());
    }

    #[test]
    fn bare_key_rules() {
        assert!(is_bare_key("server-1_a"));
        assert!(!is_bare_key(""));
        assert!(!is_bare_key("a.b"));
        assert!(!is_bare_key("ünï"));
    }
}

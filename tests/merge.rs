use mcpsync::loader::parse_servers;
use mcpsync::merge::merge;

const SOURCE: &str = r#"{
  "mcpServers": {
    "alpha": {"command": "foo", "args": ["x", "y"]},
    "beta": {"type": "http", "url": "https://beta.example.com/mcp", "headers": {"Authorization": "Bearer t"}}
  }
}"#;

#[test]
fn fresh_destination_exact_output() {
    let entries = parse_servers(r#"{"mcpServers": {"alpha": {"command": "foo", "args": ["x","y"]}}}"#).unwrap();
    assert_eq!(
        merge("", &entries),
        "[mcp_servers.alpha]\ncommand = \"foo\"\nargs = [\"x\", \"y\"]\n"
    );
}

#[test]
fn replaces_stale_block_next_to_unmanaged_table() {
    let existing = "[mcp_servers.alpha]\ncommand = \"old\"\n\n[other]\nkey = \"v\"\n";
    let entries = parse_servers(r#"{"mcpServers": {"alpha": {"command": "new"}}}"#).unwrap();
    let out = merge(existing, &entries);

    assert!(out.contains("[other]\nkey = \"v\""));
    assert!(out.contains("[mcp_servers.alpha]\ncommand = \"new\""));
    assert!(!out.contains("command = \"old\""));
    assert_eq!(out.matches("[mcp_servers.alpha]").count(), 1);
}

#[test]
fn running_twice_is_stable() {
    let entries = parse_servers(SOURCE).unwrap();
    let existing = "model = \"o3\"\n\n\n\n[mcp_servers.alpha]\ncommand = \"old\"\n[profiles.fast]\nmodel = \"o4-mini\"\n";
    let once = merge(existing, &entries);
    let twice = merge(&once, &entries);
    assert_eq!(once, twice);
}

#[test]
fn unmanaged_document_is_prefix_of_result() {
    let entries = parse_servers(SOURCE).unwrap();
    let existing = "\n# Codex settings\nmodel = \"o3\"\n\n[tui]\ntheme = \"dark\"\n\n";
    let out = merge(existing, &entries);
    assert!(out.starts_with(&format!("{}\n\n[mcp_servers.alpha]", existing.trim())));
}

#[test]
fn five_blank_lines_collapse_to_one() {
    let entries = parse_servers(SOURCE).unwrap();
    let existing = "a = 1\n\n\n\n\n\nb = 2\n";
    let out = merge(existing, &entries);
    assert!(out.starts_with("a = 1\n\nb = 2\n\n[mcp_servers.alpha]"));
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn servers_missing_from_source_are_kept() {
    let entries = parse_servers(SOURCE).unwrap();
    let existing = "[mcp_servers.gamma]\ncommand = \"g\"\n";
    let out = merge(existing, &entries);
    assert!(out.starts_with("[mcp_servers.gamma]\ncommand = \"g\"\n\n"));
}

#[test]
fn well_formed_input_yields_valid_toml() {
    let entries = parse_servers(SOURCE).unwrap();
    let existing = "model = \"o3\"\n\n[mcp_servers.alpha]\ncommand = \"old\"\n\n[tui]\ntheme = \"dark\"\n";
    let out = merge(existing, &entries);

    let doc: toml::Table = toml::from_str(&out).unwrap();
    let servers = doc["mcp_servers"].as_table().unwrap();
    assert_eq!(servers["alpha"]["command"].as_str(), Some("foo"));
    assert_eq!(servers["alpha"]["args"].as_array().unwrap().len(), 2);
    assert_eq!(servers["beta"]["url"].as_str(), Some("https://beta.example.com/mcp"));
    assert_eq!(servers["beta"]["headers"]["Authorization"].as_str(), Some("Bearer t"));
    assert!(servers["beta"].get("type").is_none());
    assert_eq!(doc["tui"]["theme"].as_str(), Some("dark"));
}

use crate::config::{McpJson, ServerEntry};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Load the server entries from a `.mcp.json` file.
///
/// A missing file and a missing `mcpServers` key both produce an empty list.
/// Malformed JSON is an error.
pub fn load_servers(path: &Path) -> Result<Vec<ServerEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_servers(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse `.mcp.json` text. The top level must be a JSON object.
pub fn parse_servers(content: &str) -> Result<Vec<ServerEntry>> {
    let document: Map<String, Value> = serde_json::from_str(content)?;
    McpJson::from_document(document)?.into_entries()
}

/// Read the current destination text, or an empty string if it does not exist yet.
pub fn read_destination(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

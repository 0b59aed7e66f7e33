use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level key in `.mcp.json` holding the server mapping.
pub const SOURCE_KEY: &str = "mcpServers";

/// Table prefix owned by this tool in the Codex config.
pub const NAMESPACE: &str = "mcp_servers";

/// Source attributes that only matter to the source format and are never rendered.
/// Codex infers the transport from the presence of `url`, so `type` is redundant there.
pub const RESERVED_KEYS: &[&str] = &["type"];

#[derive(Debug, Default, Deserialize)]
pub struct McpJson {
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: Option<Value>,
}

/// One named server definition, with its attributes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEntry {
    pub name: String,
    pub settings: Map<String, Value>,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, settings: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    /// The exact header line that introduces this server's table.
    pub fn header(&self) -> String {
        header_for(&self.name)
    }
}

pub fn header_for(name: &str) -> String {
    format!("[{NAMESPACE}.{name}]")
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

impl McpJson {
    /// Build from an already-parsed top-level object. Taking a map rather than raw text
    /// keeps a top-level array from being read as positional struct fields.
    pub fn from_document(document: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    /// Flatten the server mapping into entries, keeping the file's order.
    /// An absent or empty-ish value (`null`, `false`, `0`, `""`, `[]`) means no servers.
    /// Every server must be a JSON object.
    pub fn into_entries(self) -> Result<Vec<ServerEntry>> {
        let servers = match self.mcp_servers {
            Some(Value::Object(servers)) => servers,
            Some(ref value) if !is_empty_value(value) => bail!(
                "{SOURCE_KEY} must be an object, got {}",
                json_kind(value)
            ),
            _ => return Ok(Vec::new()),
        };

        let mut entries = Vec::with_capacity(servers.len());
        for (name, value) in servers {
            match value {
                Value::Object(settings) => entries.push(ServerEntry::new(name, settings)),
                other => bail!(
                    "server '{name}' in {SOURCE_KEY} must be an object, got {}",
                    json_kind(&other)
                ),
            }
        }
        Ok(entries)
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Source file name, looked up in the working directory unless overridden.
pub const SOURCE_FILE: &str = ".mcp.json";

/// Codex user config, relative to the home directory.
pub const CODEX_CONFIG: &str = ".codex/config.toml";

pub fn default_config() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(CODEX_CONFIG))
}

/// Expand `~` and `$VAR` references in a user-supplied path.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(path).with_context(|| format!("failed to expand path '{path}'"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lives_under_codex_dir() {
        let path = default_config().unwrap();
        assert!(path.ends_with(".codex/config.toml"));
    }

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(expand_path("conf/.mcp.json").unwrap(), PathBuf::from("conf/.mcp.json"));
    }

    #[test]
    fn expands_tilde() {
        let path = expand_path("~/.codex/config.toml").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with(".codex/config.toml"));
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = expand_path("$MCPSYNC_SURELY_UNDEFINED_VAR/config.toml").unwrap_err();
        assert!(err.to_string().contains("failed to expand path"));
    }
}

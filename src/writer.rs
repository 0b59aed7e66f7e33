use anyhow::{Context, Result};
use std::path::Path;

/// Write `content` to `path`, creating missing parent directories first.
///
/// The file is overwritten in place. There is no temp file or rename, and no lock is
/// taken; a second writer running at the same time can interleave with this one.
pub fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    Ok(())
}

use crate::diff;
use crate::lint;
use crate::loader;
use crate::merge;
use crate::writer;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct Syncer {
    source: PathBuf,
    config: PathBuf,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    /// Server names written (or that would be written), in source order.
    pub synced: Vec<String>,
    pub warnings: Vec<String>,
    /// Whether the config file was written.
    pub written: bool,
    /// Unified diff of the config, only computed for dry runs that change something.
    pub diff: Option<String>,
}

impl Syncer {
    pub fn new(source: &Path, config: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            config: config.to_path_buf(),
        }
    }

    /// Merge the source servers into the config file.
    ///
    /// With no servers in the source the config is not touched at all. With `dry_run`
    /// the merged text is only diffed against the current file.
    pub fn sync(&self, dry_run: bool) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let entries = loader::load_servers(&self.source)?;
        if entries.is_empty() {
            return Ok(report);
        }

        let existing = loader::read_destination(&self.config)?;
        let merged = merge::merge(&existing, &entries);

        report.warnings = lint::check(&entries);
        report.synced = entries.into_iter().map(|e| e.name).collect();

        if dry_run {
            if existing != merged {
                let label = self.config.display();
                report.diff = Some(diff::format_unified_diff(
                    &existing,
                    &merged,
                    &format!("current: {label}"),
                    &format!("merged: {label}"),
                ));
            }
        } else {
            writer::write_config(&self.config, &merged)?;
            report.written = true;
        }

        Ok(report)
    }
}

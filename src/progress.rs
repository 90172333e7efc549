// src/progress.rs
use std::path::Path;

use log_tally_ports::ProgressSink;
use log_tally_shared_kernel::{EntryCount, InfrastructureError};

/// Reports batch progress through the logger: unreadable files as warnings,
/// everything else at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_file(&self, path: &Path, entries: EntryCount, rejected: usize) {
        if rejected > 0 {
            log::debug!("{}: {entries} entries, {rejected} lines skipped", path.display());
        } else {
            log::debug!("{}: {entries} entries", path.display());
        }
    }

    fn on_unreadable(&self, path: &Path, error: &InfrastructureError) {
        match error {
            InfrastructureError::FileRead { source, .. } => {
                log::warn!("could not read {}: {source}", path.display());
            }
            other => log::warn!("could not read {}: {other}", path.display()),
        }
    }

    fn on_complete(&self, files: usize) {
        log::info!("summarised {files} files");
    }
}

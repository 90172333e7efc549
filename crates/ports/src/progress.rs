// crates/ports/src/progress.rs
use std::path::Path;

use log_tally_shared_kernel::{EntryCount, InfrastructureError};

/// Receives per-file events while a batch runs. Called from worker threads.
pub trait ProgressSink: Send + Sync {
    /// A file was summarised; `rejected` counts lines the parser dropped.
    fn on_file(&self, path: &Path, entries: EntryCount, rejected: usize);

    /// A file could not be read and contributes an empty summary.
    fn on_unreadable(&self, path: &Path, error: &InfrastructureError);

    /// Every file in the batch has finished.
    fn on_complete(&self, files: usize);
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_file(&self, _path: &Path, _entries: EntryCount, _rejected: usize) {}

    fn on_unreadable(&self, _path: &Path, _error: &InfrastructureError) {}

    fn on_complete(&self, _files: usize) {}
}

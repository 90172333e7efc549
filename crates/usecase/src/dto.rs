use std::path::PathBuf;

use log_tally_domain::{FileSummary, GlobalSummary};

/// Result of summarising one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub summary: FileSummary,
    /// Set when the file could not be read; `summary` is then empty.
    pub read_error: Option<String>,
}

impl FileOutcome {
    pub fn is_readable(&self) -> bool {
        self.read_error.is_none()
    }
}

/// Output of a batch run: per-file outcomes in input order plus the reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub files: Vec<FileOutcome>,
    pub global: GlobalSummary,
}

impl AnalysisReport {
    pub fn unreadable(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|file| !file.is_readable())
    }
}

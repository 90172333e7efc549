use std::path::Path;

use log_tally_domain::{FileAggregator, FileSummary};
use log_tally_ports::{LogSource, ProgressSink};
use log_tally_shared_kernel::{ErrorContext, Result};

use crate::dto::FileOutcome;

/// Read and summarise one file.
///
/// An unreadable file is not an error: it is reported to `progress` and
/// yields an empty summary so the batch keeps going.
///
/// # Errors
///
/// Fails only when the first or last record's timestamp does not match the
/// fixed layout.
pub fn summarize_file(source: &dyn LogSource, progress: &dyn ProgressSink, path: &Path) -> Result<FileOutcome> {
    let text = match source.read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            progress.on_unreadable(path, &err);
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                summary: FileSummary::empty(),
                read_error: Some(err.to_string()),
            });
        }
    };

    let parsed = FileAggregator::parse(&text);
    let summary = FileAggregator::summarize(&parsed.records)
        .with_context(|| format!("Failed to summarise '{}'", path.display()))?;

    log::debug!(
        "{}: {} records, {} rejected lines",
        path.display(),
        summary.entries,
        parsed.rejected
    );
    progress.on_file(path, summary.entries, parsed.rejected);

    Ok(FileOutcome { path: path.to_path_buf(), summary, read_error: None })
}

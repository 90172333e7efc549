// crates/ports/src/source.rs
use std::path::Path;

use log_tally_shared_kernel::InfraResult;

/// Port for loading a log file.
///
/// Implementations are shared across worker threads.
pub trait LogSource: Send + Sync {
    /// Read the whole file as text. Invalid UTF-8 may be replaced lossily.
    fn read_to_string(&self, path: &Path) -> InfraResult<String>;
}

// crates/infra/src/filesystem.rs
use std::path::Path;

use log_tally_ports::LogSource;
use log_tally_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::FileReader;

/// Reads log files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLogSource;

impl LogSource for FsLogSource {
    fn read_to_string(&self, path: &Path) -> InfraResult<String> {
        let text = FileReader::read_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        log::trace!("read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}

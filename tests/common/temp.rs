use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Scratch directory holding log files for one test.
#[derive(Debug)]
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("log_tally_").tempdir().unwrap() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_log(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// A path inside the directory that was never created.
    #[allow(dead_code)]
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

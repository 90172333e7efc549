// src/app.rs
use std::io::{self, BufWriter, Write};

use anyhow::Result;
use log_tally_infra::FsLogSource;
use log_tally_shared_kernel::PresentationError;
use log_tally_usecase::AnalyzeLogs;

use crate::{config::AppConfig, presentation, progress::LogProgress};

/// Analyse the configured files and print the report to stdout.
///
/// Every error returned here already carries its cause in its message.
pub fn run(config: &AppConfig) -> Result<()> {
    log::info!(
        "log_tally v{} · {} files · workers={}",
        crate::VERSION,
        config.paths.len(),
        config.dispatch.worker_count(config.paths.len())
    );

    let report = AnalyzeLogs::new(&FsLogSource, &LogProgress)
        .with_options(config.dispatch.clone())
        .run(&config.paths)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    presentation::render(&mut out, &report, config.format, config.per_file)?;
    out.flush().map_err(PresentationError::from)?;
    Ok(())
}

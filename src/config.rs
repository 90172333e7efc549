// src/config.rs
use std::path::PathBuf;

use log_tally_shared_kernel::PresentationError;
use log_tally_usecase::{DispatchOptions, DispatchOptionsBuilder};

use crate::cli::{Args, OutputFormat};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub per_file: bool,
    pub dispatch: DispatchOptions,
}

impl TryFrom<Args> for AppConfig {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let dispatch = DispatchOptionsBuilder::default()
            .jobs(args.jobs.map(|jobs| jobs.resolve()))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

        Ok(Self { paths: args.paths, format: args.format, per_file: args.per_file, dispatch })
    }
}

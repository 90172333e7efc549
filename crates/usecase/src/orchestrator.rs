use std::path::PathBuf;

use log_tally_domain::{FileSummary, Reducer};
use log_tally_ports::{LogSource, ProgressSink};
use log_tally_shared_kernel::{DomainError, InfrastructureError, Result};
use rayon::ThreadPool;

use crate::{
    dto::{AnalysisReport, FileOutcome},
    options::DispatchOptions,
    summarize::summarize_file,
};

/// Summarises a batch of files concurrently and reduces the results.
pub struct AnalyzeLogs<'a> {
    source: &'a dyn LogSource,
    progress: &'a dyn ProgressSink,
    options: DispatchOptions,
}

impl<'a> AnalyzeLogs<'a> {
    pub fn new(source: &'a dyn LogSource, progress: &'a dyn ProgressSink) -> Self {
        Self { source, progress, options: DispatchOptions::default() }
    }

    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run one task per path, wait for all of them, then reduce in input order.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyBatch`] when `paths` is empty
    /// - a timestamp layout failure from any file (the first in input order wins)
    /// - [`InfrastructureError::ThreadPoolCreation`] if the worker pool cannot start
    pub fn run(&self, paths: &[PathBuf]) -> Result<AnalysisReport> {
        if paths.is_empty() {
            return Err(DomainError::EmptyBatch.into());
        }

        let files = self.dispatch(paths)?;
        let summaries: Vec<FileSummary> = files.iter().map(|file| file.summary.clone()).collect();
        let global = Reducer::reduce(&summaries)?;

        self.progress.on_complete(files.len());
        Ok(AnalysisReport { files, global })
    }

    fn dispatch(&self, paths: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        let pool = self.build_pool(paths.len())?;
        log::debug!("dispatching {} files on {} workers", paths.len(), pool.current_num_threads());

        let (tx, rx) = crossbeam_channel::bounded(paths.len());
        pool.scope(|scope| {
            for (index, path) in paths.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let outcome = summarize_file(self.source, self.progress, path);
                    // rx is only dropped after the scope joins
                    let _ = tx.send((index, outcome));
                });
            }
        });
        drop(tx);

        // Arrival order depends on scheduling; restore input order before reducing.
        let mut arrived: Vec<(usize, Result<FileOutcome>)> = rx.iter().collect();
        arrived.sort_by_key(|(index, _)| *index);
        arrived.into_iter().map(|(_, outcome)| outcome).collect()
    }

    fn build_pool(&self, files: usize) -> Result<ThreadPool> {
        let workers = self.options.worker_count(files);
        match pool_of(workers) {
            Ok(pool) => Ok(pool),
            Err(err) => match self.options.fallback_worker_count(files) {
                Some(fallback) => {
                    log::debug!("cannot start {workers} workers ({err}), retrying with {fallback}");
                    pool_of(fallback).map_err(Into::into)
                }
                None => Err(err.into()),
            },
        }
    }
}

fn pool_of(workers: usize) -> std::result::Result<ThreadPool, InfrastructureError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("log-tally-{i}"))
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })
}

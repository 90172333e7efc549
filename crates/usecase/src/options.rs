use derive_builder::Builder;

/// Worker pool sizing for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct DispatchOptions {
    /// Upper bound on concurrent workers. `None` gives every file its own worker.
    #[builder(default)]
    pub jobs: Option<usize>,
}

impl DispatchOptions {
    /// Number of workers to start for `files` inputs; never zero, never more than `files`.
    ///
    /// Unbounded runs ask for one OS thread per file, which can exceed the
    /// process thread limit on very large batches; see [`Self::fallback_worker_count`].
    pub fn worker_count(&self, files: usize) -> usize {
        let files = files.max(1);
        self.jobs.unwrap_or(files).clamp(1, files)
    }

    /// Smaller pool size to retry with when an unbounded pool cannot start.
    ///
    /// `None` when `jobs` was set explicitly or the retry would not be smaller.
    pub fn fallback_worker_count(&self, files: usize) -> Option<usize> {
        let fallback = rayon::current_num_threads().clamp(1, files.max(1));
        (self.jobs.is_none() && fallback < self.worker_count(files)).then_some(fallback)
    }
}

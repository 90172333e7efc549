//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`summarize`]: one file from the [`LogSource`](log_tally_ports::LogSource) port to a summary
//! - [`orchestrator`]: fork-join dispatch of a batch followed by cross-file reduction
//! - [`options`]: worker pool sizing
//! - [`dto`]: per-file outcomes and the batch report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod options;
pub mod orchestrator;
pub mod summarize;

pub use dto::{AnalysisReport, FileOutcome};
pub use options::{DispatchOptions, DispatchOptionsBuilder};
pub use orchestrator::AnalyzeLogs;
pub use summarize::summarize_file;

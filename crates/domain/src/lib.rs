//! # Domain
//!
//! Pure log-summary logic with no I/O:
//!
//! - [`parser`]: one raw line into a [`model::LogRecord`] or a rejection reason
//! - [`analytics`]: per-file aggregation and cross-file reduction
//! - [`model`]: records, severity tallies, top-message ranking and summaries
//! - [`timestamp`]: the fixed timestamp layout shared by input and output

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod parser;
pub mod timestamp;

pub use analytics::{FileAggregator, ParsedLog, Reducer};
pub use model::{
    FileSummary, GlobalSummary, LogRecord, RankedMessage, Severity, SeverityFrequency, Summary, TOP_MESSAGE_SLOTS,
    TopMessages,
};
pub use parser::parse_line;

use chrono::NaiveDateTime;
use log_tally_shared_kernel::EntryCount;

use super::{SeverityFrequency, TopMessages};

/// Aggregated statistics over a set of records.
///
/// `start`/`end` are `None` when no record contributed (empty, fully
/// malformed or unreadable file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: EntryCount,
    pub severities: SeverityFrequency,
    pub top_messages: TopMessages,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// Summary of a single file; `start`/`end` follow file order.
pub type FileSummary = Summary;

/// Reduction of several file summaries; `start`/`end` are chronological bounds.
pub type GlobalSummary = Summary;

impl Summary {
    /// The summary of a file that yielded no records.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_zero()
    }
}

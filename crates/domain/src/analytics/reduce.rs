use chrono::NaiveDateTime;
use log_tally_shared_kernel::{DomainError, DomainResult};

use crate::model::{GlobalSummary, RankedMessage, Summary, TopMessages};

/// Merges per-file summaries into one global summary.
pub struct Reducer;

impl Reducer {
    /// Sum counts, take chronological time bounds and re-rank top messages.
    ///
    /// The global ranking is built only from each file's own top slots, so a
    /// message that never made a file's top five cannot surface globally even
    /// if its combined count would qualify. Tie-breaks follow the order of
    /// `summaries`; pass them in input order for deterministic output.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyBatch`] when `summaries` is empty.
    pub fn reduce(summaries: &[Summary]) -> DomainResult<GlobalSummary> {
        let first = summaries.first().ok_or(DomainError::EmptyBatch)?;

        let mut global = Summary { start: first.start, end: first.end, ..Summary::empty() };
        for summary in summaries {
            global.entries += summary.entries;
            global.severities += summary.severities;
            global.start = earliest(global.start, summary.start);
            global.end = latest(global.end, summary.end);
        }

        global.top_messages = TopMessages::rank(
            summaries
                .iter()
                .flat_map(|summary| summary.top_messages.slots())
                .filter(|slot| !slot.is_placeholder())
                .map(|slot: &RankedMessage| (slot.message.as_str(), slot.frequency)),
        );

        Ok(global)
    }
}

fn earliest(current: Option<NaiveDateTime>, candidate: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn latest(current: Option<NaiveDateTime>, candidate: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

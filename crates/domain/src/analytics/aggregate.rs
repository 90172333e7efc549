use log_tally_shared_kernel::{DomainError, DomainResult, EntryCount, Frequency, SummaryBound};

use crate::{
    model::{LogRecord, SeverityFrequency, Summary, TopMessages},
    parser::parse_line,
    timestamp::parse_timestamp,
};

/// Records kept from one file's text, in file order.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub records: Vec<LogRecord>,
    /// Non-blank lines the parser rejected.
    pub rejected: usize,
}

/// Reduces one file's records into a [`Summary`].
pub struct FileAggregator;

impl FileAggregator {
    /// Split `text` on `\n` and keep every line that parses.
    pub fn parse(text: &str) -> ParsedLog {
        let mut parsed = ParsedLog::default();
        for line in text.split('\n') {
            match parse_line(line) {
                Ok(record) => parsed.records.push(record),
                Err(_) if line.trim().is_empty() => {}
                Err(_) => parsed.rejected += 1,
            }
        }
        parsed
    }

    /// Summarise records already in file order.
    ///
    /// # Errors
    ///
    /// [`DomainError::TimestampFormat`] when the first or last record's
    /// timestamp does not match the fixed layout.
    pub fn summarize(records: &[LogRecord]) -> DomainResult<Summary> {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Ok(Summary::empty());
        };

        let mut severities = SeverityFrequency::default();
        for record in records {
            severities.record(record.severity());
        }

        let top_messages = TopMessages::rank(records.iter().map(|r| (r.message(), Frequency::new(1))));

        Ok(Summary {
            entries: EntryCount::new(records.len()),
            severities,
            top_messages,
            start: Some(bound_time(first, SummaryBound::Start)?),
            end: Some(bound_time(last, SummaryBound::End)?),
        })
    }

    /// [`Self::parse`] followed by [`Self::summarize`].
    pub fn summarize_text(text: &str) -> DomainResult<Summary> {
        Self::summarize(&Self::parse(text).records)
    }
}

fn bound_time(record: &LogRecord, bound: SummaryBound) -> DomainResult<chrono::NaiveDateTime> {
    parse_timestamp(record.timestamp()).map_err(|source| DomainError::TimestampFormat {
        bound,
        timestamp: record.timestamp().to_owned(),
        source,
    })
}

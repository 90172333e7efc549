pub mod record;
pub mod severity;
pub mod summary;
pub mod top_messages;

pub use record::LogRecord;
pub use severity::{Severity, SeverityFrequency};
pub use summary::{FileSummary, GlobalSummary, Summary};
pub use top_messages::{RankedMessage, TOP_MESSAGE_SLOTS, TopMessages};

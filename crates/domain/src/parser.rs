//! Line parser for the single supported grammar:
//!
//! ```text
//! <timestamp> | <severity> | <module>:<function>:<lineNumber> - <message>
//! ```

use std::str::FromStr;

use log_tally_shared_kernel::ParseError;

use crate::model::LogRecord;

/// Parse one raw line into a [`LogRecord`].
///
/// Only the first two `:` after the severity and the first `-` after that
/// are delimiters; anything later stays part of the message. The timestamp
/// must be present but its layout is not checked here.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let mut segments = line.split('|');
    let (Some(timestamp), Some(severity), Some(remainder), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(ParseError::malformed("expected exactly 3 '|'-separated segments"));
    };

    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return Err(ParseError::malformed("missing timestamp"));
    }
    let severity = severity.trim();
    if severity.is_empty() {
        return Err(ParseError::malformed("missing severity"));
    }

    let mut location = remainder.splitn(3, ':');
    let (Some(module), Some(function), Some(rest)) = (location.next(), location.next(), location.next()) else {
        return Err(ParseError::malformed("expected <module>:<function>:<line>"));
    };

    let Some((line_raw, message)) = rest.split_once('-') else {
        return Err(ParseError::malformed("expected '-' between line number and message"));
    };

    let line_raw = line_raw.trim();
    let line_number = line_raw
        .parse::<i16>()
        .map_err(|source| ParseError::InvalidLineNumber { raw: line_raw.to_owned(), source })?;

    Ok(LogRecord::new(
        timestamp,
        severity,
        module.trim(),
        function.trim(),
        line_number,
        message.trim(),
    ))
}

impl FromStr for LogRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

//! Fixed `YYYY-MM-DD HH:MM:SS.fff` timestamp layout.

use chrono::NaiveDateTime;
use log_tally_shared_kernel::TimestampError;

/// Input layout. The fractional part is optional when parsing.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Output layout, always with millisecond precision.
pub const DISPLAY_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Separators of `YYYY-MM-DD HH:MM:SS`, by byte offset. Every other offset is a digit.
const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':')];
const WHOLE_SECONDS_LEN: usize = 19;

/// Parse a timestamp in the fixed layout.
///
/// chrono alone accepts one-digit fields and leading whitespace, so the shape
/// is checked byte by byte first: two-digit fields, and an optional `.` plus
/// at least one digit after the seconds.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    if !has_fixed_shape(raw.as_bytes()) {
        return Err(TimestampError::Layout);
    }
    Ok(NaiveDateTime::parse_from_str(raw, TIMESTAMP_LAYOUT)?)
}

fn has_fixed_shape(bytes: &[u8]) -> bool {
    let Some((whole, fraction)) = bytes.split_at_checked(WHOLE_SECONDS_LEN) else {
        return false;
    };

    let fields_ok = whole.iter().enumerate().all(|(offset, byte)| {
        match SEPARATORS.iter().find(|(at, _)| *at == offset) {
            Some((_, separator)) => byte == separator,
            None => byte.is_ascii_digit(),
        }
    });

    let fraction_ok = match fraction.split_first() {
        None => true,
        Some((b'.', digits)) => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        Some(_) => false,
    };

    fields_ok && fraction_ok
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_LAYOUT).to_string()
}

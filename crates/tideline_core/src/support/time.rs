//! ISO-8601 <-> epoch-millisecond conversion.
//!
//! # Invariants
//! - Parsed instants are truncated to millisecond precision.
//! - Formatting always emits UTC with exactly three fractional digits
//!   (`YYYY-MM-DDTHH:MM:SS.sssZ`), so format -> parse is lossless.
//! - Strings without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Rejected ISO-8601 input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    value: String,
}

impl TimeParseError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for TimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "not an ISO-8601 instant: `{}`", self.value)
    }
}

impl Error for TimeParseError {}

/// Parses an ISO-8601 instant into epoch milliseconds.
///
/// Accepts RFC 3339 (`2014-01-01T12:00:00.250Z`, `...+02:00`), offset-less
/// date-times and bare dates (midnight UTC).
pub fn parse_time_ms(value: &str) -> Result<i64, TimeParseError> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.timestamp_millis());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }
    Err(TimeParseError {
        value: value.to_string(),
    })
}

/// Formats epoch milliseconds as an ISO-8601 UTC instant.
///
/// Values outside the representable calendar range are clamped to the nearest
/// bound and logged.
pub fn format_time_iso8601(time_ms: i64) -> String {
    let instant = DateTime::<Utc>::from_timestamp_millis(time_ms).unwrap_or_else(|| {
        warn!("event=time_format module=support status=clamped time_ms={time_ms}");
        if time_ms < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        }
    });
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{format_time_iso8601, parse_time_ms};

    #[test]
    fn parses_rfc3339_with_offset() {
        let utc = parse_time_ms("2014-03-01T10:00:00Z").expect("utc should parse");
        let offset = parse_time_ms("2014-03-01T12:00:00+02:00").expect("offset should parse");
        assert_eq!(utc, offset);
        assert_eq!(utc, 1_393_668_000_000);
    }

    #[test]
    fn parses_offsetless_and_date_only_as_utc() {
        assert_eq!(
            parse_time_ms("1970-01-01T00:00:01.500").expect("naive should parse"),
            1_500
        );
        assert_eq!(parse_time_ms("1970-01-02").expect("date should parse"), 86_400_000);
    }

    #[test]
    fn format_then_parse_is_lossless_to_the_millisecond() {
        for time_ms in [0_i64, 1_393_668_000_123, -86_400_001] {
            let formatted = format_time_iso8601(time_ms);
            assert_eq!(parse_time_ms(&formatted).expect("formatted should parse"), time_ms);
        }
    }

    #[test]
    fn parse_then_format_reproduces_canonical_input() {
        let canonical = "2014-03-01T10:00:00.250Z";
        let parsed = parse_time_ms(canonical).expect("canonical should parse");
        assert_eq!(format_time_iso8601(parsed), canonical);
    }

    #[test]
    fn rejects_garbage_and_empty_input() {
        let err = parse_time_ms("next tuesday").expect_err("garbage must be rejected");
        assert_eq!(err.value(), "next tuesday");
        assert!(parse_time_ms("").is_err());
    }
}

use crate::{Result, error::error::TimestampSnafu};
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use snafu::ResultExt;

static ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
static SPACE_SEPARATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
static FRACTIONAL_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
static FRACTIONAL_SPACE_SEPARATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Parses the ISO-8601-like timestamps found in the range sources. A trailing
/// `+00:00`, `.999999` and `Z` are stripped (in that order) and the result is
/// interpreted as UTC. Anything else falls back to RFC 3339 with the offset
/// converted to UTC, and then to naive timestamps with arbitrary fractional
/// seconds.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    parse_stripped(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|v| v.with_timezone(&Utc)))
        .or_else(|_| parse_naive(trimmed, FRACTIONAL_ISO_FORMAT))
        .or_else(|_| parse_naive(trimmed, FRACTIONAL_SPACE_SEPARATED_FORMAT))
        .context(TimestampSnafu { value })
}

fn parse_naive(value: &str, format: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(value, format).map(|v| v.and_utc())
}

fn parse_stripped(value: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
    let mut s = value;
    if let Some(v) = s.strip_suffix("+00:00") {
        s = v;
    }
    if let Some(v) = s.strip_suffix(".999999") {
        s = v;
    }
    if let Some(v) = s.strip_suffix('Z') {
        s = v;
    }

    parse_naive(s, ISO_FORMAT).or_else(|_| parse_naive(s, SPACE_SEPARATED_FORMAT))
}

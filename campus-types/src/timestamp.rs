//! ISO-8601 local date-time handling for request fields.
//!
//! Records carry `chrono::NaiveDateTime` values, which serialize as
//! `YYYY-MM-DDTHH:MM:SS` (fraction only when non-zero). Input is a little
//! more lenient: seconds may be omitted, and an offset or `Z` suffix is
//! accepted and dropped, keeping the wall-clock time as written.

use chrono::{DateTime, NaiveDateTime};

use crate::{Error, Result};

const MINUTE_PRECISION: &str = "%Y-%m-%dT%H:%M";

/// Parses an ISO-8601 date-time such as `2022-04-28T14:35:00`.
///
/// Accepts second and sub-second precision, minute precision
/// (`2022-04-28T14:35`), and an RFC 3339 offset (`Z`, `-08:00`), which is
/// discarded.
pub fn parse_local_datetime(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    trimmed
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, MINUTE_PRECISION))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.naive_local()))
        .map_err(|_| Error::InvalidTimestamp(text.to_string()))
}

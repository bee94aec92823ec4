//! Timestamp formats used by the timer file, the reset form and the dashboard.
//!
//! The timer file stores naive UTC timestamps (no offset). Older files were
//! written with fractional seconds or minute precision, so parsing is lenient
//! while writing always uses whole seconds.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Format written to the timer file.
pub const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of an HTML `datetime-local` input (minute precision).
pub const FORM_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used for absolute times on the dashboard.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// How far past the server clock a submitted kill time may lie.
pub const MAX_KILL_TIME_SKEW_MINS: i64 = 5;

/// Accepted naive layouts, tried in order.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", FORM_INPUT_FORMAT, "%Y-%m-%d %H:%M:%S%.f"];

/// Render a timestamp for the timer file.
pub fn format_stored(ts: Timestamp) -> String {
    ts.naive_utc().format(STORED_FORMAT).to_string()
}

/// Parse a timestamp read from the timer file.
///
/// Naive values are taken as UTC. Values carrying an explicit offset
/// (RFC 3339) are converted to UTC.
pub fn parse_stored(value: &str) -> Result<Timestamp, CoreError> {
    let value = value.trim();

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(naive.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::Validation(format!("Invalid timestamp '{value}'")))
}

/// Parse the optional kill time submitted with a reset.
///
/// Blank input means "no override" and yields `None`.
pub fn parse_form_input(value: &str) -> Result<Option<Timestamp>, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(value, FORM_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, STORED_FORMAT))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| CoreError::Validation("Invalid kill time format.".into()))
}

/// Reject a submitted kill time later than `now` plus a small clock skew.
pub fn check_kill_time(kill_time: Timestamp, now: Timestamp) -> Result<Timestamp, CoreError> {
    let latest = now
        .checked_add_signed(Duration::minutes(MAX_KILL_TIME_SKEW_MINS))
        .unwrap_or(now);
    if kill_time > latest {
        return Err(CoreError::Validation("Kill time is in the future.".into()));
    }
    Ok(kill_time)
}

/// Pre-fill value for the reset form's kill time input.
pub fn format_form_input(ts: Timestamp) -> String {
    ts.format(FORM_INPUT_FORMAT).to_string()
}

/// Absolute time as shown on the dashboard, or `"N/A"`.
pub fn format_display(ts: Option<Timestamp>) -> String {
    match ts {
        Some(ts) => ts.format(DISPLAY_FORMAT).to_string(),
        None => "N/A".to_string(),
    }
}

/// Current time truncated to whole seconds, matching the stored precision.
pub fn now_truncated() -> Timestamp {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

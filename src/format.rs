//! Display formatting for market values.
//!
//! Numbers get thousands separators and no decimals; timestamps are rounded
//! to the nearest minute. Anything that cannot be formatted is passed
//! through unchanged rather than treated as an error.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric column value as read from SQLite.
///
/// Stock is normally integral and prices come back from `ROUND()` as reals,
/// but the source database is not strictly typed, so either column may
/// hold either kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_number(*self))
    }
}

/// Output layout for timestamps.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Naive layouts accepted for `last_update`, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Format a number with `,` thousands separators and no decimal places.
///
/// Reals are rounded to the nearest integer first, halves away from zero like
/// SQLite's `ROUND`.
/// Non-finite reals render as `nan`, `inf` or `-inf`.
///
/// ```rust
/// use mktstatus::format::format_number;
///
/// assert_eq!(format_number(1_000_000_i64), "1,000,000");
/// assert_eq!(format_number(-1234.4_f64), "-1,234");
/// ```
pub fn format_number(value: impl Into<Number>) -> String {
    match value.into() {
        Number::Integer(n) => group_digits(n < 0, &n.unsigned_abs().to_string()),
        Number::Real(x) if x.is_nan() => "nan".to_string(),
        Number::Real(x) if x.is_infinite() => {
            let text = if x < 0.0 { "-inf" } else { "inf" };
            text.to_string()
        }
        Number::Real(x) => {
            let rounded = x.round();
            group_digits(rounded < 0.0, &format!("{:.0}", rounded.abs()))
        }
    }
}

fn group_digits(negative: bool, digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an ISO-8601-like timestamp into wall-clock time.
///
/// Offsets are kept as written: `12:00+02:00` stays `12:00`. A comma may
/// stand in for the decimal point. Leap seconds (`:60`) are rejected.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.replacen(',', ".", 1);
    parse_iso_like(&normalized).filter(|dt| dt.nanosecond() < 1_000_000_000)
}

fn parse_iso_like(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt);
    }
    if let Some(dt) = parse_hour_only(raw) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM-DDTHH`; chrono needs a minute field, so the hour is split off here.
fn parse_hour_only(raw: &str) -> Option<NaiveDateTime> {
    let (date, hour) = raw.split_once(|c| c == 'T' || c == ' ')?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(hour.parse().ok()?, 0, 0)
}

/// Round to the nearest minute: 30 seconds and up rounds forward.
///
/// Carries through hour, day, month and year boundaries. Returns `None` only
/// when the result would leave chrono's representable range.
pub fn round_to_minute(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    let truncated = dt
        .checked_sub_signed(Duration::seconds(i64::from(dt.second())))?
        .checked_sub_signed(Duration::nanoseconds(i64::from(dt.nanosecond())))?;
    if dt.second() >= 30 {
        truncated.checked_add_signed(Duration::minutes(1))
    } else {
        Some(truncated)
    }
}

/// Render a timestamp as `YYYY-MM-DD HH:MM`, rounded to the nearest minute.
///
/// Input that does not parse is returned verbatim.
///
/// ```rust
/// use mktstatus::format::format_timestamp;
///
/// assert_eq!(format_timestamp("2024-01-15T23:59:45"), "2024-01-16 00:00");
/// assert_eq!(format_timestamp("not-a-date"), "not-a-date");
/// ```
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(round_to_minute)
        .map(|dt| dt.format(TIMESTAMP_DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Timestamp layouts accepted in the source table, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve the report day: explicit `YYYY-MM-DD` override or yesterday.
pub fn resolve_target_date(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(yesterday()),
    }
}

/// Parse a local timestamp. Offsets, when present, are dropped without conversion.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.naive_local());
    }

    // date only → midnight
    parse_date(s)
        .or_else(|| NaiveDate::parse_from_str(s, "%m/%d/%Y").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "Tuesday, March 04"
pub fn long_day_label(d: NaiveDate) -> String {
    d.format("%A, %B %d").to_string()
}

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// One row of the activity log, as loaded from the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub timestamp: NaiveDateTime, // ⇔ date/time column (local time, no tz)
    pub shift_code: String,       // ⇔ raw shift code, e.g. "SITE-1430"
    pub driver: String,           // ⇔ driver column
    pub idle_time: f64,           // ⇔ idle time column (>= 0)
}

impl ActivityRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        shift_code: impl Into<String>,
        driver: impl Into<String>,
        idle_time: f64,
    ) -> Self {
        Self {
            timestamp,
            shift_code: shift_code.into(),
            driver: driver.into(),
            idle_time,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Time of day as "HH:MM" (24h).
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

use super::shift::ReportingShift;
use super::status::Status;
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated idle statistics of one driver within one reporting shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverShiftStats {
    pub driver: String,
    pub avg_idle_time: f64,
    pub move_count: usize,
    pub share_of_moves: f64, // fraction of the day's moves, 0.0..=1.0
    pub idle_impact: f64,    // (avg_idle_time - benchmark) * move_count
}

impl DriverShiftStats {
    pub fn status(&self) -> Status {
        Status::from_idle_impact(self.idle_impact)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftStats {
    pub shift: ReportingShift,
    pub drivers: Vec<DriverShiftStats>, // ascending by idle impact
}

impl ShiftStats {
    pub fn move_count(&self) -> usize {
        self.drivers.iter().map(|d| d.move_count).sum()
    }
}

/// A single high idle time event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Incident {
    pub driver: String,
    pub idle_time: f64,
    pub time_of_day: String, // "HH:MM"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_daily_moves: usize,
    pub site_average: f64,
    pub benchmark: f64,
    pub top_incidents: Vec<Incident>,
}

impl DailySummary {
    pub fn difference(&self) -> f64 {
        self.site_average - self.benchmark
    }

    pub fn site_status(&self) -> Status {
        Status::from_site_average(self.site_average)
    }
}

/// Everything the renderer needs for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub summary: DailySummary,
    pub shifts: Vec<ShiftStats>, // in reporting order
}

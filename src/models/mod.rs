pub mod activity;
pub mod shift;
pub mod stats;
pub mod status;

pub use activity::ActivityRecord;
pub use shift::ReportingShift;
pub use stats::{DailyReport, DailySummary, DriverShiftStats, Incident, ShiftStats};
pub use status::Status;

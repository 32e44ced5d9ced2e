use crate::config::Config;
use crate::models::{ActivityRecord, ReportingShift};
use log::debug;
use std::collections::BTreeSet;

/// Early-morning activity before this hour may belong to the previous evening's shift.
pub const OVERNIGHT_TAIL_END_HOUR: u32 = 5;

/// Records paired with the shift they are reported under.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub records: Vec<ActivityRecord>,
    /// Reporting shift of `records[i]`.
    pub shifts: Vec<ReportingShift>,
    /// Records whose code was not numeric, so the overnight rule was not applied.
    pub skipped: usize,
}

impl Classified {
    /// Distinct reporting shifts, overnight continuations first.
    pub fn sorted_shifts(&self) -> Vec<ReportingShift> {
        let unique: BTreeSet<ReportingShift> = self.shifts.iter().cloned().collect();
        unique.into_iter().collect()
    }
}

/// Substring after the last separator: "SITE-1430" → "1430".
pub fn clean_shift_code<'a>(raw: &'a str, separator: &str) -> &'a str {
    match raw.rsplit_once(separator) {
        Some((_, tail)) => tail,
        None => raw,
    }
}

/// Shift start as an integer in HHMM form, if the code is numeric.
pub fn parse_shift_start(code: &str) -> Option<u32> {
    code.trim().parse().ok()
}

/// Reporting shift for a cleaned code observed at `hour`.
///
/// The second value is false when the code is not numeric and the overnight
/// rule could not be evaluated.
pub fn reporting_shift(code: &str, hour: u32, late_shift_start_hour: u32) -> (ReportingShift, bool) {
    let Some(start) = parse_shift_start(code) else {
        return (ReportingShift::same_day(code), false);
    };

    if hour < OVERNIGHT_TAIL_END_HOUR && start >= late_shift_start_hour * 100 {
        (ReportingShift::overnight(code), true)
    } else {
        (ReportingShift::same_day(code), true)
    }
}

pub fn classify(record: &ActivityRecord, cfg: &Config) -> ReportingShift {
    let code = clean_shift_code(&record.shift_code, &cfg.shift_separator);
    reporting_shift(code, record.hour(), cfg.late_shift_start_hour).0
}

pub fn classify_all(records: Vec<ActivityRecord>, cfg: &Config) -> Classified {
    let mut out = Classified::default();

    for record in records {
        let code = clean_shift_code(&record.shift_code, &cfg.shift_separator);
        let (shift, evaluated) = reporting_shift(code, record.hour(), cfg.late_shift_start_hour);
        if !evaluated {
            debug!(
                "shift code '{}' is not numeric, overnight rule skipped for {} at {}",
                code, record.driver, record.timestamp
            );
            out.skipped += 1;
        }
        out.records.push(record);
        out.shifts.push(shift);
    }

    out
}

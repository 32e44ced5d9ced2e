use super::classifier::Classified;
use crate::models::{
    ActivityRecord, DailySummary, DriverShiftStats, Incident, ReportingShift, ShiftStats,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const TOP_INCIDENTS: usize = 5;

/// Per-shift driver statistics, shifts in reporting order.
pub fn shift_stats(classified: &Classified, benchmark: f64) -> Vec<ShiftStats> {
    let total_daily_moves = classified.records.len();

    classified
        .sorted_shifts()
        .into_iter()
        .map(|shift| {
            let drivers = driver_stats(
                records_in_shift(classified, &shift),
                total_daily_moves,
                benchmark,
            );
            ShiftStats { shift, drivers }
        })
        .collect()
}

/// Group the records of one shift by driver and score each group.
/// Rows come back ascending by idle impact, ties by driver name.
pub fn driver_stats<'a, I>(records: I, total_daily_moves: usize, benchmark: f64) -> Vec<DriverShiftStats>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = groups.entry(r.driver.as_str()).or_insert((0.0, 0));
        entry.0 += r.idle_time;
        entry.1 += 1;
    }

    let mut rows: Vec<DriverShiftStats> = groups
        .into_iter()
        .map(|(driver, (idle_sum, moves))| {
            let avg = idle_sum / moves as f64;
            DriverShiftStats {
                driver: driver.to_string(),
                avg_idle_time: avg,
                move_count: moves,
                share_of_moves: share(moves, total_daily_moves),
                idle_impact: idle_impact(avg, benchmark, moves),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.idle_impact.total_cmp(&b.idle_impact));
    rows
}

pub fn idle_impact(avg_idle_time: f64, benchmark: f64, move_count: usize) -> f64 {
    (avg_idle_time - benchmark) * move_count as f64
}

fn share(moves: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        moves as f64 / total as f64
    }
}

pub fn site_average(records: &[ActivityRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.idle_time).sum::<f64>() / records.len() as f64
}

/// The `n` highest individual idle times of the day; equal values keep file order.
pub fn top_incidents(records: &[ActivityRecord], n: usize) -> Vec<Incident> {
    let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.idle_time.total_cmp(&a.idle_time));

    sorted
        .into_iter()
        .take(n)
        .map(|r| Incident {
            driver: r.driver.clone(),
            idle_time: r.idle_time,
            time_of_day: r.time_of_day(),
        })
        .collect()
}

pub fn daily_summary(date: NaiveDate, records: &[ActivityRecord], benchmark: f64) -> DailySummary {
    DailySummary {
        date,
        total_daily_moves: records.len(),
        site_average: site_average(records),
        benchmark,
        top_incidents: top_incidents(records, TOP_INCIDENTS),
    }
}

/// Records of `classified` attributed to `shift`.
pub fn records_in_shift<'a>(
    classified: &'a Classified,
    shift: &'a ReportingShift,
) -> impl Iterator<Item = &'a ActivityRecord> + 'a {
    classified
        .records
        .iter()
        .zip(&classified.shifts)
        .filter(move |(_, s)| *s == shift)
        .map(|(r, _)| r)
}

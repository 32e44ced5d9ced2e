mod common;
use common::{day, rec, test_config};
use ridlereport::core::aggregator::{
    daily_summary, driver_stats, idle_impact, shift_stats, site_average, top_incidents,
};
use ridlereport::core::classifier::classify_all;
use ridlereport::core::logic::Core;
use ridlereport::models::{ActivityRecord, Status};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn mixed_day() -> Vec<ActivityRecord> {
    vec![
        rec("2025-03-04 01:30", "SITE-2200", "Carol", 2.0),
        rec("2025-03-04 02:45", "SITE-2200", "Carol", 1.0),
        rec("2025-03-04 04:10", "SITE-0430", "Dan", 0.3),
        rec("2025-03-04 06:20", "SITE-0600", "Ann", 0.9),
        rec("2025-03-04 07:05", "SITE-0600", "Ben", 0.2),
        rec("2025-03-04 08:40", "SITE-0600", "Ann", 1.1),
        rec("2025-03-04 14:30", "SITE-1400", "Erin", 3.4),
        rec("2025-03-04 15:10", "SITE-1400", "Erin", 0.6),
        rec("2025-03-04 16:00", "SITE-1400", "Finn", 0.7),
    ]
}

#[test]
fn test_idle_impact_formula() {
    assert!(close(idle_impact(1.0, 0.68, 2), 0.64));
    assert!(close(idle_impact(0.5, 0.68, 1), -0.18));
    assert!(close(idle_impact(0.68, 0.68, 10), 0.0));
}

#[test]
fn test_small_fixture_driver_rows() {
    let records = vec![
        rec("2025-03-04 08:10", "1430", "Alice", 0.5),
        rec("2025-03-04 09:00", "1430", "Bob", 1.5),
        rec("2025-03-04 09:45", "1430", "Bob", 0.5),
    ];

    let rows = driver_stats(&records, records.len(), 0.68);
    assert_eq!(rows.len(), 2);

    // ascending by impact: Alice (negative) first
    assert_eq!(rows[0].driver, "Alice");
    assert!(close(rows[0].avg_idle_time, 0.5));
    assert_eq!(rows[0].move_count, 1);
    assert!(close(rows[0].share_of_moves, 1.0 / 3.0));
    assert!(close(rows[0].idle_impact, -0.18));
    assert_eq!(rows[0].status(), Status::Great);

    assert_eq!(rows[1].driver, "Bob");
    assert!(close(rows[1].avg_idle_time, 1.0));
    assert_eq!(rows[1].move_count, 2);
    assert!(close(rows[1].idle_impact, 0.64));
    assert_eq!(rows[1].status(), Status::Fine);
}

#[test]
fn test_move_counts_add_up() {
    let cfg = test_config();
    let classified = classify_all(mixed_day(), &cfg);
    let shifts = shift_stats(&classified, cfg.benchmark_idle_time);

    for s in &shifts {
        let expected = classified.shifts.iter().filter(|x| **x == s.shift).count();
        assert_eq!(s.move_count(), expected, "shift {}", s.shift);
    }

    let total: usize = shifts.iter().map(|s| s.move_count()).sum();
    assert_eq!(total, classified.records.len());

    let share: f64 = shifts
        .iter()
        .flat_map(|s| s.drivers.iter())
        .map(|d| d.share_of_moves)
        .sum();
    assert!(close(share, 1.0));
}

#[test]
fn test_shift_rows_sorted_by_impact() {
    let cfg = test_config();
    let classified = classify_all(mixed_day(), &cfg);
    let shifts = shift_stats(&classified, cfg.benchmark_idle_time);

    let labels: Vec<String> = shifts.iter().map(|s| s.shift.label()).collect();
    assert_eq!(labels, vec!["2200 (Overnight)", "0430", "0600", "1400"]);

    for s in &shifts {
        for w in s.drivers.windows(2) {
            assert!(w[0].idle_impact <= w[1].idle_impact);
        }
    }

    let day_shift = &shifts[3];
    assert_eq!(day_shift.drivers.first().map(|d| d.driver.as_str()), Some("Finn"));
    assert_eq!(day_shift.drivers.last().map(|d| d.driver.as_str()), Some("Erin"));
}

#[test]
fn test_site_average_and_difference() {
    let records = mixed_day();
    let avg = site_average(&records);
    assert!(close(avg, 10.2 / 9.0));

    let summary = daily_summary(day(), &records, 0.68);
    assert_eq!(summary.total_daily_moves, 9);
    assert!(close(summary.difference(), 10.2 / 9.0 - 0.68));
    assert_eq!(summary.site_status(), Status::Bad);
}

#[test]
fn test_top_incidents_highest_first_with_time() {
    let incidents = top_incidents(&mixed_day(), 5);
    assert_eq!(incidents.len(), 5);

    let idle: Vec<f64> = incidents.iter().map(|i| i.idle_time).collect();
    assert_eq!(idle, vec![3.4, 2.0, 1.1, 1.0, 0.9]);
    assert_eq!(incidents[0].driver, "Erin");
    assert_eq!(incidents[0].time_of_day, "14:30");
    assert_eq!(incidents[1].time_of_day, "01:30");
}

#[test]
fn test_top_incidents_with_fewer_records_and_ties() {
    let records = vec![
        rec("2025-03-04 08:00", "1430", "First", 1.0),
        rec("2025-03-04 09:00", "1430", "Second", 1.0),
    ];
    let incidents = top_incidents(&records, 5);
    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0].driver, "First");
    assert_eq!(incidents[1].driver, "Second");
}

#[test]
fn test_core_builds_full_report() {
    let cfg = test_config();
    let classified = classify_all(mixed_day(), &cfg);
    let report = Core::build_daily_report(day(), &classified, &cfg);

    assert_eq!(report.summary.date, day());
    assert_eq!(report.summary.top_incidents.len(), 5);
    assert_eq!(report.shifts.len(), 4);
    assert!(report.shifts[0].shift.overnight);
}

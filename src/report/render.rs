//! Text rendering of the daily report. Pure functions, no I/O.

use crate::models::{DailyReport, DailySummary, ReportingShift, ShiftStats};
use crate::utils::date::long_day_label;
use crate::utils::formatting::{fixed2, percent1, signed2};
use crate::utils::table::{Table, boxed};

pub const TABLE_HEADERS: [&str; 5] = ["Status", "Driver", "Avg Idle Time", "% of Moves", "Idle Impact"];

pub const NO_DRIVER_DATA: &str = "No employee data to analyze for this shift.";

const FENCE: &str = "```";

/// Heading plus one block per shift, in reporting order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub heading: String,
    pub shift_blocks: Vec<ShiftBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftBlock {
    pub shift: ReportingShift,
    pub text: String,
}

pub fn render_report(report: &DailyReport) -> RenderedReport {
    RenderedReport {
        heading: render_heading(&report.summary),
        shift_blocks: report
            .shifts
            .iter()
            .map(|s| ShiftBlock {
                shift: s.shift.clone(),
                text: render_shift_block(s),
            })
            .collect(),
    }
}

/// Title, site average, benchmark line and the boxed summary.
pub fn render_heading(summary: &DailySummary) -> String {
    let parts = [
        format!(
            "📊 *Daily Idling Time Report for {}*",
            long_day_label(summary.date)
        ),
        format!(
            "\n*Site-wide Daily Average:* {} {}",
            fixed2(summary.site_average),
            summary.site_status().symbol()
        ),
        format!(
            "*Benchmark:* {} (Difference: {})",
            fixed2(summary.benchmark),
            signed2(summary.difference())
        ),
        format!("{FENCE}{}{FENCE}", render_summary_box(summary)),
    ];
    parts.join("\n")
}

pub fn legend_lines() -> Vec<String> {
    vec![
        "Idle Impact Key:  (Impact = (Avg Idle - Benchmark) * Moves)".to_string(),
        "  🟢 Great:    < 0".to_string(),
        "  🟡 Fine:     0 to 10".to_string(),
        "  🟠 Bad:      10 to 20".to_string(),
        "  🔴 Very Bad:  20+".to_string(),
    ]
}

/// Legend, blank line, then the top incidents of the day.
pub fn render_summary_box(summary: &DailySummary) -> String {
    let mut lines = legend_lines();
    lines.push(String::new());
    lines.push(format!(
        "Top {} Highest Idle Time Incidents",
        crate::core::aggregator::TOP_INCIDENTS
    ));
    for inc in &summary.top_incidents {
        lines.push(format!(
            "  - {}: {} at {}",
            inc.driver,
            fixed2(inc.idle_time),
            inc.time_of_day
        ));
    }
    boxed(&lines)
}

/// "*22:00* (from previous day)" or "*14:30*".
pub fn shift_header(shift: &ReportingShift) -> String {
    if shift.overnight {
        format!("*{}* (from previous day)", shift.display_time())
    } else {
        format!("*{}*", shift.display_time())
    }
}

pub fn render_shift_table(stats: &ShiftStats) -> Option<String> {
    if stats.drivers.is_empty() {
        return None;
    }

    let mut table = Table::with_headers(&TABLE_HEADERS);
    for d in &stats.drivers {
        table.add_row(vec![
            format!("{} ", d.status().symbol()),
            d.driver.clone(),
            fixed2(d.avg_idle_time),
            percent1(d.share_of_moves),
            signed2(d.idle_impact),
        ]);
    }
    Some(table.render())
}

pub fn render_shift_block(stats: &ShiftStats) -> String {
    let body = match render_shift_table(stats) {
        Some(table) => format!("{FENCE}{table}{FENCE}"),
        None => NO_DRIVER_DATA.to_string(),
    };
    format!("\n{}\n{}", shift_header(&stats.shift), body)
}

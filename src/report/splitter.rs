//! Splits a rendered report into at most two webhook messages.

use super::render::RenderedReport;
use crate::models::ReportingShift;

pub const CONTINUATION_HEADER: &str = "📊 *Daily Idling Time Report (continued)*\n";

/// Shifts starting before 06:00 stay in the first message.
pub const EARLY_SHIFT_CUTOFF: u32 = 600;

/// Index of the last shift, in order, whose numeric prefix is below the cutoff.
/// Non-numeric labels are skipped.
pub fn split_point(shifts: &[ReportingShift]) -> Option<usize> {
    let mut split = None;
    for (i, shift) in shifts.iter().enumerate() {
        if let Some(start) = shift.start_value()
            && start < EARLY_SHIFT_CUTOFF
        {
            split = Some(i);
        }
    }
    split
}

/// One message, or two when an early block is followed by later ones.
pub fn split_messages(report: &RenderedReport) -> Vec<String> {
    let shifts: Vec<ReportingShift> = report.shift_blocks.iter().map(|b| b.shift.clone()).collect();
    let blocks: Vec<&str> = report.shift_blocks.iter().map(|b| b.text.as_str()).collect();

    match split_point(&shifts) {
        Some(split) if split + 1 < blocks.len() => {
            let first = format!("{}{}", report.heading, blocks[..=split].concat());
            let second = format!("{}{}", CONTINUATION_HEADER, blocks[split + 1..].concat());
            vec![first, second]
        }
        _ => vec![format!("{}{}", report.heading, blocks.concat())],
    }
}

use crate::config::ColumnMap;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::utils::date::parse_timestamp;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Column positions of the required fields inside a CSV header.
struct ColumnIndex {
    date: usize,
    shift: usize,
    driver: usize,
    idle_time: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnMap) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| AppError::Load(format!("missing column '{name}'")))
        };

        Ok(Self {
            date: find(&columns.date)?,
            shift: find(&columns.shift)?,
            driver: find(&columns.driver)?,
            idle_time: find(&columns.idle_time)?,
        })
    }
}

/// Read every row of the activity log at `path`.
pub fn load_records(path: &Path, columns: &ColumnMap) -> AppResult<Vec<ActivityRecord>> {
    if !path.exists() {
        return Err(AppError::Load(format!(
            "source file not found: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)?;
    read_records(file, columns)
}

/// Read every row of an activity log from any CSV source.
pub fn read_records<R: Read>(source: R, columns: &ColumnMap) -> AppResult<Vec<ActivityRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let headers = rdr.headers()?.clone();
    let idx = ColumnIndex::resolve(&headers, columns)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // header is line 1
        let line = i + 2;
        records.push(parse_row(&row, &idx, line)?);
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, idx: &ColumnIndex, line: usize) -> AppResult<ActivityRecord> {
    let field = |pos: usize| row.get(pos).unwrap_or_default();

    let raw_ts = field(idx.date);
    let timestamp = parse_timestamp(raw_ts)
        .ok_or_else(|| AppError::Load(format!("line {line}: unparsable timestamp '{raw_ts}'")))?;

    let raw_idle = field(idx.idle_time);
    let idle_time: f64 = raw_idle
        .parse()
        .map_err(|_| AppError::Load(format!("line {line}: invalid idle time '{raw_idle}'")))?;
    if !idle_time.is_finite() || idle_time < 0.0 {
        return Err(AppError::Load(format!(
            "line {line}: idle time must be a non-negative number, got '{raw_idle}'"
        )));
    }

    Ok(ActivityRecord::new(
        timestamp,
        field(idx.shift),
        field(idx.driver),
        idle_time,
    ))
}

/// Keep only the records whose timestamp falls on `day`.
///
/// An empty result is reported as [`AppError::NoDataForDate`] so the caller can
/// short-circuit to a "no data" notice.
pub fn records_for_day(records: Vec<ActivityRecord>, day: NaiveDate) -> AppResult<Vec<ActivityRecord>> {
    let matched: Vec<ActivityRecord> = records.into_iter().filter(|r| r.date() == day).collect();

    if matched.is_empty() {
        return Err(AppError::NoDataForDate(day.format("%Y-%m-%d").to_string()));
    }
    Ok(matched)
}

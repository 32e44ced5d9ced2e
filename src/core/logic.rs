use crate::config::Config;
use crate::core::aggregator;
use crate::core::classifier::Classified;
use crate::models::DailyReport;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Aggregate one day's classified records into the report model.
    pub fn build_daily_report(date: NaiveDate, classified: &Classified, cfg: &Config) -> DailyReport {
        let benchmark = cfg.benchmark_idle_time;
        let summary = aggregator::daily_summary(date, &classified.records, benchmark);
        let shifts = aggregator::shift_stats(classified, benchmark);

        DailyReport { summary, shifts }
    }
}

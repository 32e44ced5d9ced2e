use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier;
use crate::core::loader;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::report::{render_report, split_messages};
use crate::transport::{self, Transport};
use crate::ui::messages::{done, error, header, info, step, success, warning};
use crate::utils::date;
use crate::utils::time::StepTimer;
use chrono::NaiveDate;
use std::path::Path;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        date: date_arg,
        file,
        dry_run,
    } = cmd
    {
        let target = date::resolve_target_date(date_arg.as_deref())?;
        let source = file.clone().unwrap_or_else(|| cfg.source_file.clone());
        let transport = transport::from_config(cfg, *dry_run);

        run(Path::new(&source), target, cfg, transport.as_ref())?;
    }
    Ok(())
}

/// One full report run. Pipeline failures are turned into a best-effort notice;
/// only fatal ones are returned.
pub fn run(source: &Path, target: NaiveDate, cfg: &Config, transport: &dyn Transport) -> AppResult<()> {
    let overall = StepTimer::start();
    header(format!(
        "Daily idle report for {}",
        target.format("%Y-%m-%d")
    ));

    match build_messages(source, target, cfg) {
        Ok(messages) => {
            step(5, "Sending the report");
            let timer = StepTimer::start();
            let delay = Duration::from_millis(cfg.message_delay_ms);
            let sent = transport::deliver_all(transport, &messages, delay);
            done(format!("Sent {} of {} message(s)", sent, messages.len()), &timer);
        }
        Err(e) if e.is_empty_result() => {
            let notice = e.to_string();
            warning(&notice);
            transport::deliver(transport, &notice);
        }
        Err(e) => {
            error(format!("An unexpected error occurred: {e}"));
            transport::deliver(
                transport,
                &format!("An unexpected error occurred in the daily report: {e}"),
            );
            return Err(e);
        }
    }

    success(format!("Workflow finished in {} seconds.", overall.seconds()));
    Ok(())
}

/// Load, classify, aggregate, render and split, reporting progress per step.
pub fn build_messages(source: &Path, target: NaiveDate, cfg: &Config) -> AppResult<Vec<String>> {
    step(1, "Reading CSV file");
    let timer = StepTimer::start();
    let records = loader::load_records(source, &cfg.columns)?;
    done(format!("Read {} rows", records.len()), &timer);

    step(2, "Filtering for all activity on the target day");
    let timer = StepTimer::start();
    let day_records = loader::records_for_day(records, target)?;
    done(
        format!(
            "Found {} activities on {}",
            day_records.len(),
            target.format("%Y-%m-%d")
        ),
        &timer,
    );

    step(3, "Classifying shifts");
    let timer = StepTimer::start();
    let classified = classifier::classify_all(day_records, cfg);
    if classified.skipped > 0 {
        warning(format!(
            "{} record(s) have a non-numeric shift code, overnight rule not applied to them.",
            classified.skipped
        ));
    }
    let labels: Vec<String> = classified.sorted_shifts().iter().map(|s| s.label()).collect();
    done(format!("Classified {} records", classified.records.len()), &timer);
    info(format!("Found data for shifts: {:?}", labels));

    step(4, "Building the report");
    let timer = StepTimer::start();
    let report = Core::build_daily_report(target, &classified, cfg);
    let messages = split_messages(&render_report(&report));
    done(format!("Built {} message(s)", messages.len()), &timer);

    Ok(messages)
}

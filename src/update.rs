use chrono::{DateTime, Datelike, Utc, Weekday};
use log::info;

use crate::common::CheckError;
use crate::config::Config;
use crate::schedule::ScheduleGate;
use crate::source::base::ChannelData;
use crate::urllog::UrlLog;

/// What a single check did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Not a run day, nothing was fetched or written
    Skipped(Weekday),
    /// Number of URLs appended
    Appended(usize),
}

/// Run one check: gate on `now`, fetch the channel's videos, append their
/// URLs. The whole list is fetched before the output file is opened.
pub fn update(
    cfg: &Config,
    gate: &ScheduleGate,
    now: DateTime<Utc>,
    source: &dyn ChannelData,
) -> Result<Outcome, CheckError> {
    if !gate.should_run(now) {
        info!("Not a scheduled day ({}), nothing to do", now.weekday());
        return Ok(Outcome::Skipped(now.weekday()));
    }

    info!("Checking channel {:?}", cfg.channel().id_str());
    let videos = source.videos()?;

    let log = UrlLog::new(cfg.output_path());
    let written = log.append(&videos)?;
    info!("Appended {} URLs to {}", written, log.path().display());

    Ok(Outcome::Appended(written))
}

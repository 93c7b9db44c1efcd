use std::time::Duration;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use log::debug;

use crate::common::ChannelID;
use crate::config::Config;
use crate::schedule::ScheduleGate;
use crate::source::dailymotion::DailymotionQuery;
use crate::update::update;

fn config_logging(verbosity: u64) -> Result<()> {
    // Level for this application
    let internal_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,  // -v
        2 => log::LevelFilter::Debug, // -vv
        _ => log::LevelFilter::Trace, // -vvv
    };

    // Show log output for 3rd party library at -vvv
    let thirdparty_level = match verbosity {
        0..=2 => log::LevelFilter::Warn,
        _ => log::LevelFilter::Debug, // -vvv
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(thirdparty_level)
        .level_for("dmcheck", internal_level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

/// Defaults from `Config::load`, with anything given on the command line on top
fn build_config(m: &ArgMatches) -> Result<Config> {
    let mut cfg = Config::load();
    if let Some(base) = m.value_of("api-url") {
        cfg = cfg.with_api_base(base);
    }
    if let Some(chan) = m.value_of("channel") {
        cfg = cfg.with_channel(ChannelID::new(chan)?);
    }
    if let Some(out) = m.value_of("output") {
        cfg = cfg.with_output_path(out);
    }
    if let Some(secs) = m.value_of("timeout") {
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("Invalid timeout {:?}", secs))?;
        cfg = cfg.with_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(cfg)
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("dmcheck")
        .about("Appends a channel's video URLs to a file on Mondays and Fridays")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("channel")
                .long("channel")
                .takes_value(true)
                .value_name("ID"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .takes_value(true)
                .value_name("PATH"),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .takes_value(true)
                .value_name("URL"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS"),
        )
}

pub fn main() -> Result<()> {
    let app_m = app().get_matches();

    // Logging levels
    let verbosity = app_m.occurrences_of("verbose");
    config_logging(verbosity)?;

    let cfg = build_config(&app_m)?;
    debug!("Using config {:?}", &cfg);

    // The only clock reading, everything below is decided from it
    let now = chrono::Utc::now();
    debug!("Running at {}", now);
    let source = DailymotionQuery::new(&cfg);
    let outcome = update(&cfg, &ScheduleGate::default(), now, &source)
        .with_context(|| format!("Checking channel {:?} failed", cfg.channel().id_str()))?;
    debug!("Finished: {:?}", outcome);

    Ok(())
}

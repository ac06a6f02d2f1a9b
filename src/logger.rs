use crate::Result;
use colorful::core::color_string::CString;
use colorful::Colorful;
use core::fmt::Arguments;
use core::time::Duration;
use dashmap::DashMap;
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Record};
use std::fs;
use std::io;
use std::time::Instant;

const LOG_DIR: &str = "logs/";

/// Time passed since the last log of the same target and line
fn get_time_and_update(name: &str) -> Duration {
    lazy_static! {
        static ref TRACKING: DashMap<String, Instant> = DashMap::new();
    }

    let now = Instant::now();
    let duration = match TRACKING.get(name) {
        Some(time) => now.duration_since(*time),
        None => Duration::from_millis(0),
    };

    TRACKING.insert(name.to_owned(), now);

    duration
}

pub fn init_logger() -> Result<()> {
    fs::create_dir_all(LOG_DIR)?;

    let console = fern::Dispatch::new()
        .format(console_format)
        .level(LevelFilter::Info)
        .level_for("infocard", LevelFilter::Trace)
        .level_for("tracing", LevelFilter::Error)
        .level_for("serenity", LevelFilter::Error)
        .filter(|meta| meta.level() > LevelFilter::Warn)
        .chain(io::stdout());

    let err_console = fern::Dispatch::new()
        .format(console_format)
        .level(LevelFilter::Warn)
        .chain(io::stderr());

    let file = fern::Dispatch::new()
        .format(file_format)
        .level(LevelFilter::Warn)
        .level_for("infocard", LevelFilter::Debug)
        .chain(fern::DateBased::new(LOG_DIR, "infocard-%F.log"));

    fern::Dispatch::new()
        .chain(file)
        .chain(console)
        .chain(err_console)
        .apply()?;

    Ok(())
}

fn console_format(cb: fern::FormatCallback, message: &Arguments, record: &Record) {
    let mut name = record.target().to_owned();

    if let Some(line) = record.line() {
        name.push_str(&format!(":{}", line));
    }

    let duration = get_time_and_update(&name);

    cb.finish(format_args!(
        "{}{} {}{} {} ({}ms)",
        "[".dark_gray(),
        level_style(record.level()),
        name,
        "]".dark_gray(),
        message,
        duration.as_millis(),
    ))
}

fn file_format(cb: fern::FormatCallback, message: &Arguments, record: &Record) {
    let line = record.line().map(|v| format!(":{}", v));

    cb.finish(format_args!(
        "{} {:<5} {}{} {}",
        chrono::Local::now().format("%T%.3f"),
        record.level(),
        record.target(),
        line.unwrap_or_default(),
        message,
    ))
}

fn level_style(level: Level) -> CString {
    match level {
        Level::Trace => "TRACE".dark_gray(),
        Level::Debug => "DEBUG".white(),
        Level::Info => "INFO".green(),
        Level::Warn => "WARN".yellow(),
        Level::Error => "ERROR".red().bold(),
    }
}

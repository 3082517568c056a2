//! Logger setup for the diet planner.
//!
//! Messages go through the `log` facade and are dispatched by `fern`: info and
//! below to stdout, warnings and errors to stderr, coloured when writing to a
//! terminal.
use std::env;
use std::fmt::{Arguments, Display};
use std::io::IsTerminal;

use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

use crate::error::{DietError, Result};

/// Environment variable that overrides the log level given on the command line.
pub const LOG_LEVEL_ENV: &str = "DIET_LOG_LEVEL";

/// Level used when neither the environment nor the CLI sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Parse a log level name (case-insensitive).
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        unknown => Err(DietError::InvalidInput(format!(
            "Unknown log level: {}",
            unknown
        ))),
    }
}

/// Initialise the program logger.
///
/// `DIET_LOG_LEVEL` takes precedence over `level_from_cli`, which falls back
/// to `info`.
pub fn init(level_from_cli: Option<&str>) -> Result<()> {
    let level = env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| level_from_cli.unwrap_or(DEFAULT_LOG_LEVEL).to_string());
    let level = parse_level(&level)?;

    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    let use_colour_stdout = std::io::stdout().is_terminal();
    let use_colour_stderr = std::io::stderr().is_terminal();

    Dispatch::new()
        .chain(
            Dispatch::new()
                .filter(|metadata| metadata.level() > LevelFilter::Warn)
                .format(move |out, message, record| {
                    write_log_colour(out, message, record, use_colour_stdout, &colours);
                })
                .level(level)
                .chain(std::io::stdout()),
        )
        .chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    write_log_colour(out, message, record, use_colour_stderr, &colours);
                })
                .level(level.min(LevelFilter::Warn))
                .chain(std::io::stderr()),
        )
        .apply()
        .map_err(|e| DietError::Logger(e.to_string()))
}

fn write_log<T: Display>(out: FormatCallback, level: T, target: &str, message: &Arguments) {
    let timestamp = Local::now().format("%H:%M:%S");

    out.finish(format_args!("[{timestamp} {level} {target}] {message}"));
}

fn write_log_colour(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    use_colour: bool,
    colours: &ColoredLevelConfig,
) {
    if use_colour {
        write_log(out, colours.color(record.level()), record.target(), message);
    } else {
        write_log(out, record.level(), record.target(), message);
    }
}

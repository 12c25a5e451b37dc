use crate::{ServerError, ServerErrorResult};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, info};

/// Crates whose debug output would drown the bot's own lines
const NOISY_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Install the global logger.
///
/// Lines go to `log_file` when set (never colored), otherwise to stdout,
/// colored when `colored` is true.
pub fn initialize(
    log_level: gd_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            (file.into(), None)
        }
        None => (std::io::stdout().into(), colored.then(level_colors)),
    };

    let dispatch = NOISY_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, target| {
            dispatch.level_for(*target, LevelFilter::Warn.min(level_filter))
        });

    dispatch
        .format(move |out, message, record| write_line(out, message, record, colors.as_ref()))
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let level = match colors {
        Some(colors) => colors.color(record.level()).to_string(),
        None => record.level().to_string(),
    };

    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

use crate::error::{Result as RunnerErrorResult, RunnerError};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::info;

/// Initialize the global logger.
///
/// With `log_file` set, lines are appended to that file without colors.
/// Otherwise they go to stdout, colored when `colored` is true.
pub fn initialize(
    log_level: roster_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> RunnerErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| RunnerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            plain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        None => plain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| RunnerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logging at {:?} to {}", level_filter, path.display()),
        None => info!("Logging at {:?} to stdout", level_filter),
    }

    Ok(())
}

fn plain<T: Into<Output>>(target: T) -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| write_line(out, message, record.level()))
        .chain(target)
}

/// `[<rfc3339> - <LEVEL>] <message>`
fn write_line(out: FormatCallback<'_>, message: &Arguments<'_>, level: impl Display) {
    out.finish(format_args!(
        "[{} - {}] {}",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        level,
        message
    ))
}

use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the process-wide logger.
///
/// `log_file` of None logs to stdout. File output is always plain;
/// color codes would otherwise end up in the file.
pub fn initialize(
    level: jot_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let sink = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            formatted(false).chain(file)
        }
        None => formatted(colored).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level.filter())
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level.filter(),
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level.filter()),
    }

    // Route tracing events from dependencies into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// One line per record: timestamp, level, message, call site.
fn formatted(colored: bool) -> Dispatch {
    if colored {
        let palette = ColoredLevelConfig::new()
            .debug(Color::BrightBlack)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                palette.color(record.level()),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
    }
}

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Crates whose info-level chatter drowns out broadcast progress.
const QUIET_TARGETS: &[&str] = &["sqlx", "hyper", "reqwest"];

enum LogTarget {
    /// Append-only file, never colored.
    File(PathBuf),
    Stdout { colored: bool },
}

/// Install the global `log` backend and bridge `tracing` spans into it.
///
/// `log_file` set means file output; otherwise stdout, colored when asked.
pub fn initialize(
    log_level: ap_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter: LevelFilter = log_level.into();
    let target = match log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stdout { colored },
    };

    let mut dispatch = Dispatch::new().level(level_filter);
    for quiet in QUIET_TARGETS {
        dispatch = dispatch.level_for(*quiet, LevelFilter::Warn.min(level_filter));
    }

    let output = match &target {
        LogTarget::File(path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None))
            .chain(open_log_file(path)?),
        LogTarget::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, Some(&colors))
                })
                .chain(std::io::stdout())
        }
        // systemd, docker logs
        LogTarget::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None))
            .chain(std::io::stdout()),
    };

    dispatch
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &target {
        LogTarget::File(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        LogTarget::Stdout { .. } => info!("Logger initialized: level={}, stdout", level_filter),
    }

    // Broadcast spans from the delivery crates are emitted through `tracing`
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            colors.color(record.level()),
            message,
            file,
            line
        )),
        None => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            record.level(),
            message,
            file,
            line
        )),
    }
}

fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

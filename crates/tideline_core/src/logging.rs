//! File logging bootstrap driven by [`CoreConfig`].
//!
//! # Responsibility
//! - Start the process-wide rotating file logger the first time a config with
//!   a log directory is applied.
//! - Route panics into the log before the default hook runs.
//!
//! # Invariants
//! - File logging is opt-in: a config without `log_dir` never starts a logger.
//! - Once running, the logger accepts only the level and directory it was
//!   started with; any other request is an error, never a silent switch.
//! - Core log lines carry counts and statuses, never labels or attribute values.

use crate::config::CoreConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "tideline";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;
const PANIC_MESSAGE_LIMIT: usize = 120;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    status: LoggingStatus,
    _handle: LoggerHandle,
}

/// Level and directory of the running file logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingStatus {
    pub level: LevelFilter,
    pub log_dir: PathBuf,
}

/// Logger bootstrap failures.
#[derive(Debug)]
pub enum LoggingError {
    CreateDir { path: PathBuf, source: io::Error },
    Start { reason: String },
    Conflict {
        active: LoggingStatus,
        requested: LoggingStatus,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "cannot create log directory `{}`: {source}", path.display())
            }
            Self::Start { reason } => write!(f, "file logger failed to start: {reason}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already runs at level {} in `{}`; refusing level {} in `{}`",
                active.level,
                active.log_dir.display(),
                requested.level,
                requested.log_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Start { .. } | Self::Conflict { .. } => None,
        }
    }
}

/// Applies the logging part of `config`.
///
/// Returns `Ok(false)` when `config` names no log directory, and `Ok(true)`
/// once a file logger matching `config` is running. Repeating a call with the
/// same config is a no-op.
///
/// # Errors
/// - `CreateDir` when the log directory cannot be created.
/// - `Start` when the logger backend refuses to start.
/// - `Conflict` when a logger with another level or directory already runs.
pub fn init_logging(config: &CoreConfig) -> Result<bool, LoggingError> {
    let Some(log_dir) = config.log_dir.clone() else {
        return Ok(false);
    };
    let requested = LoggingStatus {
        level: config.log_level,
        log_dir,
    };

    let active = ACTIVE.get_or_try_init(|| start(&requested))?;
    if active.status != requested {
        return Err(LoggingError::Conflict {
            active: active.status.clone(),
            requested,
        });
    }
    Ok(true)
}

/// The running logger's settings, or `None` before the first successful init.
pub fn logging_status() -> Option<LoggingStatus> {
    ACTIVE.get().map(|active| active.status.clone())
}

fn start(status: &LoggingStatus) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&status.log_dir).map_err(|source| LoggingError::CreateDir {
        path: status.log_dir.clone(),
        source,
    })?;

    let spec = status.level.as_str().to_ascii_lowercase();
    let handle = Logger::try_with_str(&spec)
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(status.log_dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        })
        .map_err(|err| LoggingError::Start {
            reason: err.to_string(),
        })?;

    install_panic_hook();
    info!(
        "event=logging_init module=logging status=ok version={} level={spec}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        status: status.clone(),
        _handle: handle,
    })
}

// Runs at most once: `start` is only reached from inside the `ACTIVE` init.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=logging status=error location={location} message={}",
            panic_message(info.payload())
        );
        previous(info);
    }));
}

/// Single-line, length-capped rendering of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    let text = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>");
    let mut message: String = text
        .chars()
        .take(PANIC_MESSAGE_LIMIT)
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if text.chars().nth(PANIC_MESSAGE_LIMIT).is_some() {
        message.push_str("...");
    }
    message
}

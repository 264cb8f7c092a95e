//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and default merge order from the
//!   process environment.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults; malformed values are
//!   rejected, never silently replaced.
//! - A configured log directory is always absolute.

use crate::sync::strategy::MergeOrder;
use log::LevelFilter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TIDELINE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TIDELINE_LOG_DIR";
pub const ENV_MERGE_ORDER: &str = "TIDELINE_MERGE_ORDER";

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
    InvalidMergeOrder(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL} is invalid: `{value}`; expected off|error|warn|info|debug|trace"
            ),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidMergeOrder(value) => write!(
                f,
                "{ENV_MERGE_ORDER} is invalid: `{value}`; expected new_before_old|new_after_old"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: LevelFilter,
    pub log_dir: Option<PathBuf>,
    pub merge_order: MergeOrder,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            merge_order: MergeOrder::default(),
        }
    }
}

impl CoreConfig {
    /// Reads `TIDELINE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// - Returns `InvalidLogLevel` for an unsupported level name.
    /// - Returns `RelativeLogDir` when the log directory is not absolute.
    /// - Returns `InvalidMergeOrder` for an unknown merge order name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = parse_level(&raw).ok_or(ConfigError::InvalidLogLevel(raw))?;
        }
        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(raw));
            }
            config.log_dir = Some(path);
        }
        if let Some(raw) = non_blank(lookup(ENV_MERGE_ORDER)) {
            config.merge_order =
                MergeOrder::parse(&raw).ok_or(ConfigError::InvalidMergeOrder(raw))?;
        }

        Ok(config)
    }
}

/// `debug` in debug builds, `info` in release builds.
fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    if raw.eq_ignore_ascii_case("warning") {
        return Some(LevelFilter::Warn);
    }
    raw.parse().ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

//! Error taxonomy for timeline model construction and reconciliation.
//!
//! # Responsibility
//! - Surface collaborator parse failures with the entity and field that
//!   carried the bad value.
//! - Keep unknown-GUID lookups out of the error path (they are `Option`).
//!
//! # Invariants
//! - Errors are returned unchanged from `replace`/`merge`; the aggregate is not
//!   rolled back.
//! - Error messages never include attribute values other than the rejected
//!   input string itself.

use crate::support::color::ColorParseError;
use crate::support::time::TimeParseError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by entity construction and reconciliation.
pub type ModelResult<T> = Result<T, ModelError>;

/// Entity kind tag carried in errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Fragment,
    Timeseries,
    Event,
    Row,
    Group,
    Root,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fragment => "fragment",
            Self::Timeseries => "timeseries",
            Self::Event => "event",
            Self::Row => "row",
            Self::Group => "group",
            Self::Root => "root",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed external record errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A timestamp field could not be parsed as ISO-8601.
    InvalidTimestamp {
        entity: EntityKind,
        guid: String,
        field: &'static str,
        source: TimeParseError,
    },
    /// A color field could not be parsed as a CSS color.
    InvalidColor {
        entity: EntityKind,
        guid: String,
        field: &'static str,
        source: ColorParseError,
    },
}

impl ModelError {
    pub(crate) fn timestamp(
        entity: EntityKind,
        guid: &str,
        field: &'static str,
        source: TimeParseError,
    ) -> Self {
        Self::InvalidTimestamp {
            entity,
            guid: guid.to_string(),
            field,
            source,
        }
    }

    pub(crate) fn color(
        entity: EntityKind,
        guid: &str,
        field: &'static str,
        source: ColorParseError,
    ) -> Self {
        Self::InvalidColor {
            entity,
            guid: guid.to_string(),
            field,
            source,
        }
    }

    /// Kind of the entity whose record was rejected.
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::InvalidTimestamp { entity, .. } | Self::InvalidColor { entity, .. } => *entity,
        }
    }

    /// GUID of the entity whose record was rejected.
    pub fn guid(&self) -> &str {
        match self {
            Self::InvalidTimestamp { guid, .. } | Self::InvalidColor { guid, .. } => guid,
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp {
                entity,
                guid,
                field,
                source,
            } => write!(f, "{entity} `{guid}` has invalid `{field}`: {source}"),
            Self::InvalidColor {
                entity,
                guid,
                field,
                source,
            } => write!(f, "{entity} `{guid}` has invalid `{field}`: {source}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTimestamp { source, .. } => Some(source),
            Self::InvalidColor { source, .. } => Some(source),
        }
    }
}

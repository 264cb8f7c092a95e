//! Core timeline model for Tideline.
//!
//! Live, identity-stable entity graph behind a timeline widget, plus the
//! reconciliation engine that keeps it in step with external snapshots.

pub mod collections;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notification;
pub mod support;
pub mod sync;

pub use collections::ordered_set::{Keyed, OrderedSet, OrderedStringSet};
pub use config::{ConfigError, CoreConfig};
pub use error::{EntityKind, ModelError, ModelResult};
pub use logging::{init_logging, logging_status, LoggingError, LoggingStatus};
pub use model::event::EventModel;
pub use model::fragment::FragmentModel;
pub use model::group::GroupModel;
pub use model::record::{
    Timeline, TimelineEvent, TimelineFragment, TimelineGroup, TimelineRoot, TimelineRow,
    TimelineTimeseries,
};
pub use model::root::RootModel;
pub use model::row::RowModel;
pub use model::timeline::{EntitySet, TimelineModel};
pub use model::timeseries::TimeseriesModel;
pub use notification::{ListenerId, Notification};
pub use support::axis::Axis1D;
pub use support::color::{parse_css_color, Color, ColorParseError};
pub use support::guid::new_guid;
pub use support::time::{format_time_iso8601, parse_time_ms, TimeParseError};
pub use sync::apply::SyncSummary;
pub use sync::strategy::{
    ChildPlacement, MergeOrder, MergeStrategy, PlacementMerge, NEW_AFTER_OLD, NEW_BEFORE_OLD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

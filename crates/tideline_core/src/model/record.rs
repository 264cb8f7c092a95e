//! Plain exchange records for the timeline snapshot.
//!
//! # Responsibility
//! - Define the wire/storage-agnostic shape consumed and produced at the
//!   aggregate boundary.
//! - Keep every cross-reference a GUID string; records never nest entities.
//!
//! # Invariants
//! - Optional fields are `Option<T>`; defaults are filled only by entity
//!   `snapshot()`, never during deserialization.
//! - Timestamps are ISO-8601 strings and colors are CSS strings here; models
//!   hold the parsed forms.

use serde::{Deserialize, Serialize};

/// One contiguous run of timeseries samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFragment {
    #[serde(rename = "fragmentGuid")]
    pub fragment_guid: String,
    #[serde(default)]
    pub data: Vec<f64>,
    /// Sample instants, parallel to `data`.
    #[serde(rename = "times_ISO8601", default)]
    pub times_iso8601: Vec<String>,
}

/// Timeseries display hints plus its ordered fragment references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTimeseries {
    pub timeseries_guid: String,
    /// `lines`, `points`, `lines-and-points`, `bars` or `area`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_hint: Option<String>,
    /// Origin value for bar and area plots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment_guids: Option<Vec<String>>,
}

/// Interval event shown on a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub event_guid: String,
    #[serde(rename = "start_ISO8601")]
    pub start_iso8601: String,
    #[serde(rename = "end_ISO8601")]
    pub end_iso8601: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Row with its ordered event and timeseries references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub row_guid: String,
    pub label: String,
    /// Seeds the row value axis at construction only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    /// Seeds the row value axis at construction only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_guids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeseries_guids: Option<Vec<String>>,
}

/// Collapsible group of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroup {
    pub group_guid: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub row_guids: Vec<String>,
}

/// Top-level ordering of groups. `TimelineRoot::default()` is the empty root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRoot {
    #[serde(default)]
    pub group_guids: Vec<String>,
}

/// Whole-aggregate exchange snapshot.
///
/// Every list defaults to empty so partial payloads (typical for `merge`)
/// deserialize without ceremony.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub timeseries_fragments: Vec<TimelineFragment>,
    #[serde(default)]
    pub timeseries: Vec<TimelineTimeseries>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    #[serde(default)]
    pub rows: Vec<TimelineRow>,
    #[serde(default)]
    pub groups: Vec<TimelineGroup>,
    #[serde(default)]
    pub root: TimelineRoot,
}

impl TimelineFragment {
    pub fn new(fragment_guid: impl Into<String>) -> Self {
        Self {
            fragment_guid: fragment_guid.into(),
            data: Vec::new(),
            times_iso8601: Vec::new(),
        }
    }
}

impl TimelineTimeseries {
    pub fn new(timeseries_guid: impl Into<String>) -> Self {
        Self {
            timeseries_guid: timeseries_guid.into(),
            ..Self::default()
        }
    }
}

impl TimelineEvent {
    pub fn new(
        event_guid: impl Into<String>,
        start_iso8601: impl Into<String>,
        end_iso8601: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            event_guid: event_guid.into(),
            start_iso8601: start_iso8601.into(),
            end_iso8601: end_iso8601.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}

impl TimelineRow {
    pub fn new(row_guid: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            row_guid: row_guid.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}

impl TimelineGroup {
    pub fn new(group_guid: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            group_guid: group_guid.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}

impl TimelineRoot {
    pub fn new(group_guids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            group_guids: group_guids.into_iter().map(Into::into).collect(),
        }
    }
}

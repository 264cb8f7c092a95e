//! Timeseries fragment entity model.

use crate::collections::ordered_set::Keyed;
use crate::error::{EntityKind, ModelError, ModelResult};
use crate::model::attr::replace_if_changed;
use crate::model::record::TimelineFragment;
use crate::notification::Notification;
use crate::support::time::{format_time_iso8601, parse_time_ms};
use std::cell::{Ref, RefCell};

/// Live fragment: numeric samples with parallel epoch-millisecond instants.
#[derive(Debug)]
pub struct FragmentModel {
    fragment_guid: String,
    attrs_changed: Notification,
    data: RefCell<Vec<f64>>,
    times_ms: RefCell<Vec<i64>>,
}

impl FragmentModel {
    pub fn new(fragment: &TimelineFragment) -> ModelResult<Self> {
        let model = Self {
            fragment_guid: fragment.fragment_guid.clone(),
            attrs_changed: Notification::new(),
            data: RefCell::default(),
            times_ms: RefCell::default(),
        };
        model.set_attrs(fragment)?;
        Ok(model)
    }

    pub fn fragment_guid(&self) -> &str {
        &self.fragment_guid
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// Overwrites samples and instants, then fires once.
    pub fn set_attrs(&self, fragment: &TimelineFragment) -> ModelResult<()> {
        let times_ms = fragment
            .times_iso8601
            .iter()
            .map(String::as_str)
            .map(parse_time_ms)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                ModelError::timestamp(
                    EntityKind::Fragment,
                    &self.fragment_guid,
                    "times_ISO8601",
                    err,
                )
            })?;
        self.times_ms.replace(times_ms);
        self.data.replace(fragment.data.clone());
        self.attrs_changed.fire();
        Ok(())
    }

    /// Samples in time order. Drop the guard before writing them.
    pub fn data(&self) -> Ref<'_, [f64]> {
        Ref::map(self.data.borrow(), Vec::as_slice)
    }

    pub fn set_data(&self, data: Vec<f64>) {
        if replace_if_changed(&self.data, data) {
            self.attrs_changed.fire();
        }
    }

    pub fn times_ms(&self) -> Ref<'_, [i64]> {
        Ref::map(self.times_ms.borrow(), Vec::as_slice)
    }

    pub fn set_times_ms(&self, times_ms: Vec<i64>) {
        if replace_if_changed(&self.times_ms, times_ms) {
            self.attrs_changed.fire();
        }
    }

    /// First sample instant; `None` for an empty fragment.
    pub fn start_ms(&self) -> Option<i64> {
        self.times_ms.borrow().first().copied()
    }

    /// Last sample instant; `None` for an empty fragment.
    pub fn end_ms(&self) -> Option<i64> {
        self.times_ms.borrow().last().copied()
    }

    pub fn snapshot(&self) -> TimelineFragment {
        TimelineFragment {
            fragment_guid: self.fragment_guid.clone(),
            data: self.data().to_vec(),
            times_iso8601: self
                .times_ms()
                .iter()
                .map(|time_ms| format_time_iso8601(*time_ms))
                .collect(),
        }
    }
}

impl Keyed for FragmentModel {
    fn key(&self) -> &str {
        &self.fragment_guid
    }
}

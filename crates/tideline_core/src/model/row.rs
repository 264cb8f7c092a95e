//! Timeline row entity model.

use crate::collections::ordered_set::{Keyed, OrderedStringSet};
use crate::error::ModelResult;
use crate::model::attr::{replace_if_changed, set_if_changed};
use crate::model::record::TimelineRow;
use crate::notification::Notification;
use crate::support::axis::Axis1D;
use std::cell::{Cell, Ref, RefCell, RefMut};

const DEFAULT_Y_MIN: f64 = 0.0;
const DEFAULT_Y_MAX: f64 = 1.0;

/// Live row: label, display hint, value axis, and ordered references to
/// events and timeseries.
///
/// # Invariants
/// - The value axis is seeded from `yMin`/`yMax` at construction only;
///   `set_attrs` and `snapshot` never touch it.
#[derive(Debug)]
pub struct RowModel {
    row_guid: String,
    attrs_changed: Notification,
    label: RefCell<String>,
    ui_hint: RefCell<Option<String>>,
    data_axis: Cell<Axis1D>,
    event_guids: RefCell<OrderedStringSet>,
    timeseries_guids: RefCell<OrderedStringSet>,
}

impl RowModel {
    pub fn new(row: &TimelineRow) -> ModelResult<Self> {
        let model = Self {
            row_guid: row.row_guid.clone(),
            attrs_changed: Notification::new(),
            label: RefCell::default(),
            ui_hint: RefCell::default(),
            data_axis: Cell::new(Axis1D::new(
                row.y_min.unwrap_or(DEFAULT_Y_MIN),
                row.y_max.unwrap_or(DEFAULT_Y_MAX),
            )),
            event_guids: RefCell::new(OrderedStringSet::from_ids(row.event_guids.iter().flatten())),
            timeseries_guids: RefCell::new(OrderedStringSet::from_ids(
                row.timeseries_guids.iter().flatten(),
            )),
        };
        model.set_attrs(row)?;
        Ok(model)
    }

    pub fn row_guid(&self) -> &str {
        &self.row_guid
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// Overwrites label and hint, then fires once.
    pub fn set_attrs(&self, row: &TimelineRow) -> ModelResult<()> {
        self.label.replace(row.label.clone());
        self.ui_hint.replace(row.ui_hint.clone());
        self.attrs_changed.fire();
        Ok(())
    }

    pub fn data_axis(&self) -> Axis1D {
        self.data_axis.get()
    }

    pub fn set_data_axis(&self, data_axis: Axis1D) {
        if set_if_changed(&self.data_axis, data_axis) {
            self.attrs_changed.fire();
        }
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        if replace_if_changed(&self.label, label.into()) {
            self.attrs_changed.fire();
        }
    }

    pub fn ui_hint(&self) -> Option<String> {
        self.ui_hint.borrow().clone()
    }

    pub fn set_ui_hint(&self, ui_hint: Option<String>) {
        if replace_if_changed(&self.ui_hint, ui_hint) {
            self.attrs_changed.fire();
        }
    }

    pub fn event_guids(&self) -> Ref<'_, OrderedStringSet> {
        self.event_guids.borrow()
    }

    pub fn event_guids_mut(&self) -> RefMut<'_, OrderedStringSet> {
        self.event_guids.borrow_mut()
    }

    pub fn timeseries_guids(&self) -> Ref<'_, OrderedStringSet> {
        self.timeseries_guids.borrow()
    }

    pub fn timeseries_guids_mut(&self) -> RefMut<'_, OrderedStringSet> {
        self.timeseries_guids.borrow_mut()
    }

    pub fn snapshot(&self) -> TimelineRow {
        TimelineRow {
            row_guid: self.row_guid.clone(),
            label: self.label(),
            y_min: None,
            y_max: None,
            ui_hint: self.ui_hint(),
            event_guids: Some(self.event_guids().to_array()),
            timeseries_guids: Some(self.timeseries_guids().to_array()),
        }
    }
}

impl Keyed for RowModel {
    fn key(&self) -> &str {
        &self.row_guid
    }
}

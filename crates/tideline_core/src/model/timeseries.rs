//! Timeseries entity model.

use crate::collections::ordered_set::{Keyed, OrderedStringSet};
use crate::error::{EntityKind, ModelError, ModelResult};
use crate::model::attr::{replace_if_changed, set_if_changed};
use crate::model::record::TimelineTimeseries;
use crate::notification::Notification;
use crate::support::color::{parse_css_color, Color};
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Live timeseries: display hints plus ordered fragment references.
#[derive(Debug)]
pub struct TimeseriesModel {
    timeseries_guid: String,
    attrs_changed: Notification,
    ui_hint: RefCell<Option<String>>,
    baseline: Cell<Option<f64>>,
    line_color: Cell<Option<Color>>,
    point_color: Cell<Option<Color>>,
    line_thickness: Cell<Option<f64>>,
    point_size: Cell<Option<f64>>,
    fragment_guids: RefCell<OrderedStringSet>,
}

impl TimeseriesModel {
    pub fn new(timeseries: &TimelineTimeseries) -> ModelResult<Self> {
        let model = Self {
            timeseries_guid: timeseries.timeseries_guid.clone(),
            attrs_changed: Notification::new(),
            ui_hint: RefCell::default(),
            baseline: Cell::new(None),
            line_color: Cell::new(None),
            point_color: Cell::new(None),
            line_thickness: Cell::new(None),
            point_size: Cell::new(None),
            fragment_guids: RefCell::new(OrderedStringSet::from_ids(
                timeseries.fragment_guids.iter().flatten(),
            )),
        };
        model.set_attrs(timeseries)?;
        Ok(model)
    }

    pub fn timeseries_guid(&self) -> &str {
        &self.timeseries_guid
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// Overwrites every display attribute, then fires once.
    ///
    /// Fragment references are left alone; merging them is the caller's call.
    pub fn set_attrs(&self, timeseries: &TimelineTimeseries) -> ModelResult<()> {
        let line_color = self.parse_color("lineColor", timeseries.line_color.as_deref())?;
        let point_color = self.parse_color("pointColor", timeseries.point_color.as_deref())?;
        self.ui_hint.replace(timeseries.ui_hint.clone());
        self.baseline.set(timeseries.baseline);
        self.line_color.set(line_color);
        self.point_color.set(point_color);
        self.line_thickness.set(timeseries.line_thickness);
        self.point_size.set(timeseries.point_size);
        self.attrs_changed.fire();
        Ok(())
    }

    fn parse_color(&self, field: &'static str, value: Option<&str>) -> ModelResult<Option<Color>> {
        value
            .map(parse_css_color)
            .transpose()
            .map_err(|err| {
                ModelError::color(EntityKind::Timeseries, &self.timeseries_guid, field, err)
            })
    }

    pub fn ui_hint(&self) -> Option<String> {
        self.ui_hint.borrow().clone()
    }

    pub fn set_ui_hint(&self, ui_hint: Option<String>) {
        if replace_if_changed(&self.ui_hint, ui_hint) {
            self.attrs_changed.fire();
        }
    }

    pub fn baseline(&self) -> Option<f64> {
        self.baseline.get()
    }

    pub fn set_baseline(&self, baseline: Option<f64>) {
        if set_if_changed(&self.baseline, baseline) {
            self.attrs_changed.fire();
        }
    }

    pub fn line_color(&self) -> Option<Color> {
        self.line_color.get()
    }

    pub fn set_line_color(&self, line_color: Option<Color>) {
        if set_if_changed(&self.line_color, line_color) {
            self.attrs_changed.fire();
        }
    }

    pub fn point_color(&self) -> Option<Color> {
        self.point_color.get()
    }

    pub fn set_point_color(&self, point_color: Option<Color>) {
        if set_if_changed(&self.point_color, point_color) {
            self.attrs_changed.fire();
        }
    }

    pub fn line_thickness(&self) -> Option<f64> {
        self.line_thickness.get()
    }

    pub fn set_line_thickness(&self, line_thickness: Option<f64>) {
        if set_if_changed(&self.line_thickness, line_thickness) {
            self.attrs_changed.fire();
        }
    }

    pub fn point_size(&self) -> Option<f64> {
        self.point_size.get()
    }

    pub fn set_point_size(&self, point_size: Option<f64>) {
        if set_if_changed(&self.point_size, point_size) {
            self.attrs_changed.fire();
        }
    }

    pub fn fragment_guids(&self) -> Ref<'_, OrderedStringSet> {
        self.fragment_guids.borrow()
    }

    pub fn fragment_guids_mut(&self) -> RefMut<'_, OrderedStringSet> {
        self.fragment_guids.borrow_mut()
    }

    pub fn snapshot(&self) -> TimelineTimeseries {
        TimelineTimeseries {
            timeseries_guid: self.timeseries_guid.clone(),
            ui_hint: self.ui_hint(),
            baseline: self.baseline(),
            line_color: self.line_color().map(|color| color.css_string()),
            point_color: self.point_color().map(|color| color.css_string()),
            line_thickness: self.line_thickness(),
            point_size: self.point_size(),
            fragment_guids: Some(self.fragment_guids().to_array()),
        }
    }
}

impl Keyed for TimeseriesModel {
    fn key(&self) -> &str {
        &self.timeseries_guid
    }
}

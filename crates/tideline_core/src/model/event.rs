//! Timeline event entity model.

use crate::collections::ordered_set::Keyed;
use crate::error::{EntityKind, ModelError, ModelResult};
use crate::model::attr::{replace_if_changed, set_if_changed};
use crate::model::record::TimelineEvent;
use crate::notification::Notification;
use crate::support::color::{parse_css_color, Color};
use crate::support::time::{format_time_iso8601, parse_time_ms};
use std::cell::{Cell, RefCell};

/// Live event: an interval with label and style attributes.
///
/// # Invariants
/// - `start_ms`/`end_ms` are epoch milliseconds; the model does not enforce
///   `start_ms <= end_ms`.
/// - An omitted `userEditable` is stored as `false`.
#[derive(Debug)]
pub struct EventModel {
    event_guid: String,
    attrs_changed: Notification,
    start_ms: Cell<i64>,
    end_ms: Cell<i64>,
    label: RefCell<String>,
    label_icon: RefCell<Option<String>>,
    user_editable: Cell<bool>,
    style_guid: RefCell<Option<String>>,
    fg_color: Cell<Option<Color>>,
    bg_color: Cell<Option<Color>>,
    border_color: Cell<Option<Color>>,
}

impl EventModel {
    pub fn new(event: &TimelineEvent) -> ModelResult<Self> {
        let model = Self {
            event_guid: event.event_guid.clone(),
            attrs_changed: Notification::new(),
            start_ms: Cell::new(0),
            end_ms: Cell::new(0),
            label: RefCell::default(),
            label_icon: RefCell::default(),
            user_editable: Cell::new(false),
            style_guid: RefCell::default(),
            fg_color: Cell::new(None),
            bg_color: Cell::new(None),
            border_color: Cell::new(None),
        };
        model.set_attrs(event)?;
        Ok(model)
    }

    pub fn event_guid(&self) -> &str {
        &self.event_guid
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// Overwrites every attribute, then fires once.
    ///
    /// Nothing is assigned unless every timestamp and color parses.
    pub fn set_attrs(&self, event: &TimelineEvent) -> ModelResult<()> {
        let start_ms = self.parse_time("start_ISO8601", &event.start_iso8601)?;
        let end_ms = self.parse_time("end_ISO8601", &event.end_iso8601)?;
        let fg_color = self.parse_color("fgColor", event.fg_color.as_deref())?;
        let bg_color = self.parse_color("bgColor", event.bg_color.as_deref())?;
        let border_color = self.parse_color("borderColor", event.border_color.as_deref())?;

        self.start_ms.set(start_ms);
        self.end_ms.set(end_ms);
        self.label.replace(event.label.clone());
        self.label_icon.replace(event.label_icon.clone());
        self.user_editable.set(event.user_editable.unwrap_or(false));
        self.style_guid.replace(event.style_guid.clone());
        self.fg_color.set(fg_color);
        self.bg_color.set(bg_color);
        self.border_color.set(border_color);
        self.attrs_changed.fire();
        Ok(())
    }

    fn parse_time(&self, field: &'static str, value: &str) -> ModelResult<i64> {
        parse_time_ms(value)
            .map_err(|err| ModelError::timestamp(EntityKind::Event, &self.event_guid, field, err))
    }

    fn parse_color(&self, field: &'static str, value: Option<&str>) -> ModelResult<Option<Color>> {
        value
            .map(parse_css_color)
            .transpose()
            .map_err(|err| ModelError::color(EntityKind::Event, &self.event_guid, field, err))
    }

    /// Moves both ends at once; fires once if either end changed.
    pub fn set_interval(&self, start_ms: i64, end_ms: i64) {
        let start_changed = set_if_changed(&self.start_ms, start_ms);
        let end_changed = set_if_changed(&self.end_ms, end_ms);
        if start_changed || end_changed {
            self.attrs_changed.fire();
        }
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms.get()
    }

    pub fn set_start_ms(&self, start_ms: i64) {
        if set_if_changed(&self.start_ms, start_ms) {
            self.attrs_changed.fire();
        }
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms.get()
    }

    pub fn set_end_ms(&self, end_ms: i64) {
        if set_if_changed(&self.end_ms, end_ms) {
            self.attrs_changed.fire();
        }
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms() - self.start_ms()
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        if replace_if_changed(&self.label, label.into()) {
            self.attrs_changed.fire();
        }
    }

    pub fn label_icon(&self) -> Option<String> {
        self.label_icon.borrow().clone()
    }

    pub fn set_label_icon(&self, label_icon: Option<String>) {
        if replace_if_changed(&self.label_icon, label_icon) {
            self.attrs_changed.fire();
        }
    }

    pub fn is_user_editable(&self) -> bool {
        self.user_editable.get()
    }

    pub fn set_user_editable(&self, user_editable: bool) {
        if set_if_changed(&self.user_editable, user_editable) {
            self.attrs_changed.fire();
        }
    }

    pub fn style_guid(&self) -> Option<String> {
        self.style_guid.borrow().clone()
    }

    pub fn set_style_guid(&self, style_guid: Option<String>) {
        if replace_if_changed(&self.style_guid, style_guid) {
            self.attrs_changed.fire();
        }
    }

    pub fn fg_color(&self) -> Option<Color> {
        self.fg_color.get()
    }

    pub fn set_fg_color(&self, fg_color: Option<Color>) {
        if set_if_changed(&self.fg_color, fg_color) {
            self.attrs_changed.fire();
        }
    }

    pub fn bg_color(&self) -> Option<Color> {
        self.bg_color.get()
    }

    pub fn set_bg_color(&self, bg_color: Option<Color>) {
        if set_if_changed(&self.bg_color, bg_color) {
            self.attrs_changed.fire();
        }
    }

    pub fn border_color(&self) -> Option<Color> {
        self.border_color.get()
    }

    pub fn set_border_color(&self, border_color: Option<Color>) {
        if set_if_changed(&self.border_color, border_color) {
            self.attrs_changed.fire();
        }
    }

    pub fn snapshot(&self) -> TimelineEvent {
        TimelineEvent {
            event_guid: self.event_guid.clone(),
            start_iso8601: format_time_iso8601(self.start_ms()),
            end_iso8601: format_time_iso8601(self.end_ms()),
            label: self.label(),
            label_icon: self.label_icon(),
            user_editable: Some(self.is_user_editable()),
            style_guid: self.style_guid(),
            fg_color: self.fg_color().map(|color| color.css_string()),
            bg_color: self.bg_color().map(|color| color.css_string()),
            border_color: self.border_color().map(|color| color.css_string()),
        }
    }
}

impl Keyed for EventModel {
    fn key(&self) -> &str {
        &self.event_guid
    }
}

//! Timeline group entity model.

use crate::collections::ordered_set::{Keyed, OrderedStringSet};
use crate::error::ModelResult;
use crate::model::attr::{replace_if_changed, set_if_changed};
use crate::model::record::TimelineGroup;
use crate::notification::Notification;
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Live group: label, collapsed flag, and ordered row references.
///
/// An omitted `collapsed` is stored as `false`.
#[derive(Debug)]
pub struct GroupModel {
    group_guid: String,
    attrs_changed: Notification,
    label: RefCell<String>,
    collapsed: Cell<bool>,
    row_guids: RefCell<OrderedStringSet>,
}

impl GroupModel {
    pub fn new(group: &TimelineGroup) -> ModelResult<Self> {
        let model = Self {
            group_guid: group.group_guid.clone(),
            attrs_changed: Notification::new(),
            label: RefCell::default(),
            collapsed: Cell::new(false),
            row_guids: RefCell::new(OrderedStringSet::from_ids(&group.row_guids)),
        };
        model.set_attrs(group)?;
        Ok(model)
    }

    pub fn group_guid(&self) -> &str {
        &self.group_guid
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// Overwrites label and collapsed flag, then fires once.
    pub fn set_attrs(&self, group: &TimelineGroup) -> ModelResult<()> {
        self.label.replace(group.label.clone());
        self.collapsed.set(group.collapsed.unwrap_or(false));
        self.attrs_changed.fire();
        Ok(())
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        if replace_if_changed(&self.label, label.into()) {
            self.attrs_changed.fire();
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        if set_if_changed(&self.collapsed, collapsed) {
            self.attrs_changed.fire();
        }
    }

    /// Row references in display order. Drop the guard before mutating them.
    pub fn row_guids(&self) -> Ref<'_, OrderedStringSet> {
        self.row_guids.borrow()
    }

    pub fn row_guids_mut(&self) -> RefMut<'_, OrderedStringSet> {
        self.row_guids.borrow_mut()
    }

    pub fn snapshot(&self) -> TimelineGroup {
        TimelineGroup {
            group_guid: self.group_guid.clone(),
            label: self.label(),
            collapsed: Some(self.is_collapsed()),
            row_guids: self.row_guids().to_array(),
        }
    }
}

impl Keyed for GroupModel {
    fn key(&self) -> &str {
        &self.group_guid
    }
}

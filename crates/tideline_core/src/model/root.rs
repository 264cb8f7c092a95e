//! Timeline root entity model.

use crate::collections::ordered_set::OrderedStringSet;
use crate::error::ModelResult;
use crate::model::record::TimelineRoot;
use crate::notification::Notification;
use std::cell::{Ref, RefCell, RefMut};

/// The single root: ordered group references and no attributes.
#[derive(Debug, Default)]
pub struct RootModel {
    attrs_changed: Notification,
    group_guids: RefCell<OrderedStringSet>,
}

impl RootModel {
    pub fn new(root: &TimelineRoot) -> ModelResult<Self> {
        let model = Self {
            attrs_changed: Notification::new(),
            group_guids: RefCell::new(OrderedStringSet::from_ids(&root.group_guids)),
        };
        model.set_attrs(root)?;
        Ok(model)
    }

    pub fn attrs_changed(&self) -> &Notification {
        &self.attrs_changed
    }

    /// The root carries no attributes; this only fires the notification.
    pub fn set_attrs(&self, _root: &TimelineRoot) -> ModelResult<()> {
        self.attrs_changed.fire();
        Ok(())
    }

    pub fn group_guids(&self) -> Ref<'_, OrderedStringSet> {
        self.group_guids.borrow()
    }

    pub fn group_guids_mut(&self) -> RefMut<'_, OrderedStringSet> {
        self.group_guids.borrow_mut()
    }

    pub fn snapshot(&self) -> TimelineRoot {
        TimelineRoot {
            group_guids: self.group_guids().to_array(),
        }
    }
}

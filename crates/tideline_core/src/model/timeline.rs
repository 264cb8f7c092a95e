//! Aggregate timeline model.
//!
//! # Responsibility
//! - Own one ordered identity set per entity kind plus the single root.
//! - Build the aggregate from a snapshot and produce snapshots of it.
//! - Host the reconciliation entry points (`replace`, `merge`, implemented in
//!   `crate::sync`).
//!
//! # Invariants
//! - The per-kind sets are the only source of truth for existence.
//! - Entities are shared as `Rc`; identity is pointer identity and survives
//!   every reconciliation that keeps the GUID.
//! - No set is borrowed while an entity notification fires, so listeners may
//!   read or mutate the aggregate from inside a dispatch.
//! - Child-reference lists may name GUIDs with no live entity; lookups for
//!   them return `None`.
//!
//! # See also
//! - `crate::notification` for dispatch rules.

use crate::collections::ordered_set::OrderedSet;
use crate::error::ModelResult;
use crate::model::event::EventModel;
use crate::model::fragment::FragmentModel;
use crate::model::group::GroupModel;
use crate::model::record::Timeline;
use crate::model::root::RootModel;
use crate::model::row::RowModel;
use crate::model::timeseries::TimeseriesModel;
use log::debug;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Ordered set of shared entity models.
pub type EntitySet<T> = OrderedSet<Rc<T>>;

/// Live, identity-stable timeline aggregate.
///
/// Every operation takes `&self`. Hold the aggregate in an `Rc` and give
/// listeners a `Weak` to it; a strong reference from a listener would keep
/// the aggregate alive through its own entities.
#[derive(Debug, Default)]
pub struct TimelineModel {
    pub(crate) fragments: RefCell<EntitySet<FragmentModel>>,
    pub(crate) timeseries: RefCell<EntitySet<TimeseriesModel>>,
    pub(crate) events: RefCell<EntitySet<EventModel>>,
    pub(crate) rows: RefCell<EntitySet<RowModel>>,
    pub(crate) groups: RefCell<EntitySet<GroupModel>>,
    pub(crate) root: RootModel,
}

impl TimelineModel {
    /// Empty aggregate with an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregate from `timeline`.
    ///
    /// Within one kind, the first record for a GUID wins; later duplicates are
    /// ignored.
    ///
    /// # Errors
    /// - Returns the first record that fails timestamp or color parsing.
    pub fn from_timeline(timeline: &Timeline) -> ModelResult<Self> {
        let mut model = Self {
            root: RootModel::new(&timeline.root)?,
            ..Self::default()
        };
        for fragment in &timeline.timeseries_fragments {
            model.fragments.get_mut().add(Rc::new(FragmentModel::new(fragment)?));
        }
        for timeseries in &timeline.timeseries {
            model
                .timeseries
                .get_mut()
                .add(Rc::new(TimeseriesModel::new(timeseries)?));
        }
        for event in &timeline.events {
            model.events.get_mut().add(Rc::new(EventModel::new(event)?));
        }
        for row in &timeline.rows {
            model.rows.get_mut().add(Rc::new(RowModel::new(row)?));
        }
        for group in &timeline.groups {
            model.groups.get_mut().add(Rc::new(GroupModel::new(group)?));
        }
        debug!(
            "event=timeline_build module=model status=ok fragments={} timeseries={} events={} rows={} groups={}",
            model.fragments.get_mut().len(),
            model.timeseries.get_mut().len(),
            model.events.get_mut().len(),
            model.rows.get_mut().len(),
            model.groups.get_mut().len()
        );
        Ok(model)
    }

    /// Fragments in display order. Drop the guard before reconciling.
    pub fn fragments(&self) -> Ref<'_, EntitySet<FragmentModel>> {
        self.fragments.borrow()
    }

    pub fn timeseries_set(&self) -> Ref<'_, EntitySet<TimeseriesModel>> {
        self.timeseries.borrow()
    }

    pub fn events(&self) -> Ref<'_, EntitySet<EventModel>> {
        self.events.borrow()
    }

    pub fn rows(&self) -> Ref<'_, EntitySet<RowModel>> {
        self.rows.borrow()
    }

    pub fn groups(&self) -> Ref<'_, EntitySet<GroupModel>> {
        self.groups.borrow()
    }

    pub fn root(&self) -> &RootModel {
        &self.root
    }

    pub fn fragment(&self, fragment_guid: &str) -> Option<Rc<FragmentModel>> {
        self.fragments.borrow().value_for(fragment_guid).cloned()
    }

    pub fn timeseries(&self, timeseries_guid: &str) -> Option<Rc<TimeseriesModel>> {
        self.timeseries.borrow().value_for(timeseries_guid).cloned()
    }

    pub fn event(&self, event_guid: &str) -> Option<Rc<EventModel>> {
        self.events.borrow().value_for(event_guid).cloned()
    }

    pub fn row(&self, row_guid: &str) -> Option<Rc<RowModel>> {
        self.rows.borrow().value_for(row_guid).cloned()
    }

    pub fn group(&self, group_guid: &str) -> Option<Rc<GroupModel>> {
        self.groups.borrow().value_for(group_guid).cloned()
    }

    /// Plain snapshot of the whole aggregate, in display order.
    pub fn snapshot(&self) -> Timeline {
        Timeline {
            timeseries_fragments: self.fragments().map(|fragment| fragment.snapshot()),
            timeseries: self.timeseries_set().map(|timeseries| timeseries.snapshot()),
            events: self.events().map(|event| event.snapshot()),
            rows: self.rows().map(|row| row.snapshot()),
            groups: self.groups().map(|group| group.snapshot()),
            root: self.root.snapshot(),
        }
    }
}

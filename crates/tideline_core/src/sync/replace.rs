//! Wholesale reconciliation: make the aggregate equal an incoming snapshot.
//!
//! # Invariants
//! - Prune runs before add, so an entity absent from the snapshot is dropped
//!   and never re-added in the same call.
//! - Entities present on both sides stay in their slot and keep their
//!   listeners; only their attributes and child lists are rewritten.
//! - Every child-reference list, and each kind's collection, ends up in the
//!   incoming order.
//! - Entity notifications fire with no collection borrowed; listeners see the
//!   partly reconciled aggregate.

use crate::collections::ordered_set::OrderedStringSet;
use crate::error::ModelResult;
use crate::model::event::EventModel;
use crate::model::fragment::FragmentModel;
use crate::model::group::GroupModel;
use crate::model::record::Timeline;
use crate::model::row::RowModel;
use crate::model::timeline::TimelineModel;
use crate::model::timeseries::TimeseriesModel;
use crate::sync::apply::{prune_to_incoming, upsert_all, SyncSummary};
use log::{debug, info};

/// Rewrites `target` so it lists exactly `incoming`, in that order.
///
/// The retain step runs during pruning; this places the survivors and the new
/// ids at the front in incoming order.
fn place_children<'a>(
    target: &mut OrderedStringSet,
    incoming: impl IntoIterator<Item = &'a String>,
) {
    target.add_all_at(incoming.into_iter().cloned(), Some(0), true);
}

impl TimelineModel {
    /// Reconciles the aggregate to equal `timeline`.
    ///
    /// After success, `snapshot()` equals `timeline` up to default-filling.
    ///
    /// # Errors
    /// - Returns the first record that fails timestamp or color parsing. The
    ///   call is not atomic: pruning and any earlier additions stay applied.
    pub fn replace(&self, timeline: &Timeline) -> ModelResult<SyncSummary> {
        let mut summary = SyncSummary::default();

        self.root.group_guids_mut().retain_ids(&timeline.root.group_guids);
        summary.removed += prune_to_incoming(
            &self.groups,
            &timeline.groups,
            |group| group.group_guid.as_str(),
            |model, group| {
                model.row_guids_mut().retain_ids(&group.row_guids);
            },
        );
        summary.removed += prune_to_incoming(
            &self.rows,
            &timeline.rows,
            |row| row.row_guid.as_str(),
            |model, row| {
                model.event_guids_mut().retain_ids(row.event_guids.iter().flatten());
                model
                    .timeseries_guids_mut()
                    .retain_ids(row.timeseries_guids.iter().flatten());
            },
        );
        summary.removed += prune_to_incoming(
            &self.events,
            &timeline.events,
            |event| event.event_guid.as_str(),
            |_, _| {},
        );
        summary.removed += prune_to_incoming(
            &self.timeseries,
            &timeline.timeseries,
            |timeseries| timeseries.timeseries_guid.as_str(),
            |model, timeseries| {
                model
                    .fragment_guids_mut()
                    .retain_ids(timeseries.fragment_guids.iter().flatten());
            },
        );
        summary.removed += prune_to_incoming(
            &self.fragments,
            &timeline.timeseries_fragments,
            |fragment| fragment.fragment_guid.as_str(),
            |_, _| {},
        );
        debug!(
            "event=timeline_replace module=sync status=pruned removed={}",
            summary.removed
        );

        upsert_all(
            &self.fragments,
            &timeline.timeseries_fragments,
            |fragment| fragment.fragment_guid.as_str(),
            FragmentModel::set_attrs,
            FragmentModel::new,
            &mut summary,
        )?;
        self.fragments.borrow_mut().reorder(
            timeline
                .timeseries_fragments
                .iter()
                .map(|fragment| &fragment.fragment_guid),
        );
        upsert_all(
            &self.timeseries,
            &timeline.timeseries,
            |timeseries| timeseries.timeseries_guid.as_str(),
            |model, timeseries| {
                model.set_attrs(timeseries)?;
                place_children(
                    &mut model.fragment_guids_mut(),
                    timeseries.fragment_guids.iter().flatten(),
                );
                Ok(())
            },
            TimeseriesModel::new,
            &mut summary,
        )?;
        self.timeseries.borrow_mut().reorder(
            timeline
                .timeseries
                .iter()
                .map(|timeseries| &timeseries.timeseries_guid),
        );
        upsert_all(
            &self.events,
            &timeline.events,
            |event| event.event_guid.as_str(),
            EventModel::set_attrs,
            EventModel::new,
            &mut summary,
        )?;
        self.events
            .borrow_mut()
            .reorder(timeline.events.iter().map(|event| &event.event_guid));
        upsert_all(
            &self.rows,
            &timeline.rows,
            |row| row.row_guid.as_str(),
            |model, row| {
                model.set_attrs(row)?;
                place_children(&mut model.event_guids_mut(), row.event_guids.iter().flatten());
                place_children(
                    &mut model.timeseries_guids_mut(),
                    row.timeseries_guids.iter().flatten(),
                );
                Ok(())
            },
            RowModel::new,
            &mut summary,
        )?;
        self.rows.borrow_mut().reorder(timeline.rows.iter().map(|row| &row.row_guid));
        upsert_all(
            &self.groups,
            &timeline.groups,
            |group| group.group_guid.as_str(),
            |model, group| {
                model.set_attrs(group)?;
                place_children(&mut model.row_guids_mut(), &group.row_guids);
                Ok(())
            },
            GroupModel::new,
            &mut summary,
        )?;
        self.groups
            .borrow_mut()
            .reorder(timeline.groups.iter().map(|group| &group.group_guid));

        self.root.set_attrs(&timeline.root)?;
        place_children(&mut self.root.group_guids_mut(), &timeline.root.group_guids);

        info!("event=timeline_replace module=sync status=ok {summary}");
        Ok(summary)
    }
}

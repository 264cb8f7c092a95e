//! Incremental reconciliation: fold an incoming payload into the aggregate.
//!
//! # Invariants
//! - Nothing is ever removed; entities and child references only appear or
//!   get updated.
//! - Existing entities are updated only through the supplied strategy; new
//!   GUIDs are constructed directly from their records.
//! - The root always goes through `MergeStrategy::update_root`.

use crate::error::ModelResult;
use crate::model::event::EventModel;
use crate::model::fragment::FragmentModel;
use crate::model::group::GroupModel;
use crate::model::record::Timeline;
use crate::model::row::RowModel;
use crate::model::timeline::TimelineModel;
use crate::model::timeseries::TimeseriesModel;
use crate::sync::apply::{upsert_all, SyncSummary};
use crate::sync::strategy::MergeStrategy;
use log::info;

impl TimelineModel {
    /// Merges `timeline` into the aggregate using `strategy` for collisions.
    ///
    /// Kinds are processed fragment, timeseries, event, row, group, then root.
    /// `summary.removed` is always zero.
    ///
    /// # Errors
    /// - Returns the first record that fails timestamp or color parsing. The
    ///   call is not atomic: records processed before the failure stay merged.
    pub fn merge(
        &self,
        timeline: &Timeline,
        strategy: &dyn MergeStrategy,
    ) -> ModelResult<SyncSummary> {
        let mut summary = SyncSummary::default();

        upsert_all(
            &self.fragments,
            &timeline.timeseries_fragments,
            |fragment| fragment.fragment_guid.as_str(),
            |model, fragment| strategy.update_fragment(model, fragment),
            FragmentModel::new,
            &mut summary,
        )?;
        upsert_all(
            &self.timeseries,
            &timeline.timeseries,
            |timeseries| timeseries.timeseries_guid.as_str(),
            |model, timeseries| strategy.update_timeseries(model, timeseries),
            TimeseriesModel::new,
            &mut summary,
        )?;
        upsert_all(
            &self.events,
            &timeline.events,
            |event| event.event_guid.as_str(),
            |model, event| strategy.update_event(model, event),
            EventModel::new,
            &mut summary,
        )?;
        upsert_all(
            &self.rows,
            &timeline.rows,
            |row| row.row_guid.as_str(),
            |model, row| strategy.update_row(model, row),
            RowModel::new,
            &mut summary,
        )?;
        upsert_all(
            &self.groups,
            &timeline.groups,
            |group| group.group_guid.as_str(),
            |model, group| strategy.update_group(model, group),
            GroupModel::new,
            &mut summary,
        )?;
        strategy.update_root(&self.root, &timeline.root)?;

        info!("event=timeline_merge module=sync status=ok {summary}");
        Ok(summary)
    }
}

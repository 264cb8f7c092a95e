//! Merge strategies: how an existing entity absorbs an incoming record.
//!
//! # Responsibility
//! - Define the six-method policy contract used by `TimelineModel::merge`.
//! - Ship the two canonical policies (`NEW_BEFORE_OLD`, `NEW_AFTER_OLD`) and
//!   the `MergeOrder` name used to pick one from configuration.
//!
//! # Invariants
//! - Every method overwrites attributes through `set_attrs` (one notification).
//! - Child GUID lists are merged with reordering enabled; existing references
//!   that the incoming record does not mention are never removed.

use crate::collections::ordered_set::OrderedStringSet;
use crate::error::ModelResult;
use crate::model::event::EventModel;
use crate::model::fragment::FragmentModel;
use crate::model::group::GroupModel;
use crate::model::record::{
    TimelineEvent, TimelineFragment, TimelineGroup, TimelineRoot, TimelineRow, TimelineTimeseries,
};
use crate::model::root::RootModel;
use crate::model::row::RowModel;
use crate::model::timeseries::TimeseriesModel;

/// Policy deciding how a live entity absorbs an incoming record with the same GUID.
///
/// The aggregate only calls these methods for entities that already exist;
/// new GUIDs are constructed directly from the incoming record.
pub trait MergeStrategy {
    fn update_fragment(
        &self,
        model: &FragmentModel,
        incoming: &TimelineFragment,
    ) -> ModelResult<()>;

    fn update_timeseries(
        &self,
        model: &TimeseriesModel,
        incoming: &TimelineTimeseries,
    ) -> ModelResult<()>;

    fn update_event(&self, model: &EventModel, incoming: &TimelineEvent) -> ModelResult<()>;

    fn update_row(&self, model: &RowModel, incoming: &TimelineRow) -> ModelResult<()>;

    fn update_group(&self, model: &GroupModel, incoming: &TimelineGroup) -> ModelResult<()>;

    fn update_root(&self, model: &RootModel, incoming: &TimelineRoot) -> ModelResult<()>;
}

/// Where incoming child GUIDs land relative to the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPlacement {
    /// Incoming GUIDs are inserted as a block at the front.
    Front,
    /// Incoming GUIDs are appended as a block at the back.
    Back,
}

impl ChildPlacement {
    fn merge_into<I>(self, target: &mut OrderedStringSet, incoming: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let index = match self {
            Self::Front => Some(0),
            Self::Back => None,
        };
        let incoming = incoming.into_iter().map(|guid| guid.as_ref().to_string());
        target.add_all_at(incoming, index, true);
    }
}

/// Full attribute overwrite plus child-list placement.
///
/// This is the shape of both canonical policies; they differ only in where
/// incoming child GUIDs land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementMerge {
    placement: ChildPlacement,
}

impl PlacementMerge {
    pub const fn new(placement: ChildPlacement) -> Self {
        Self { placement }
    }
}

/// Incoming child GUIDs go in front of the existing ones.
pub const NEW_BEFORE_OLD: PlacementMerge = PlacementMerge::new(ChildPlacement::Front);

/// Incoming child GUIDs go after the existing ones.
pub const NEW_AFTER_OLD: PlacementMerge = PlacementMerge::new(ChildPlacement::Back);

/// Named selector for the two canonical policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeOrder {
    #[default]
    NewBeforeOld,
    NewAfterOld,
}

impl MergeOrder {
    /// Parses `new_before_old` / `new_after_old` (or `before` / `after`),
    /// case-insensitively. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "new_before_old" | "before" => Some(Self::NewBeforeOld),
            "new_after_old" | "after" => Some(Self::NewAfterOld),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewBeforeOld => "new_before_old",
            Self::NewAfterOld => "new_after_old",
        }
    }

    pub fn strategy(self) -> &'static dyn MergeStrategy {
        match self {
            Self::NewBeforeOld => &NEW_BEFORE_OLD,
            Self::NewAfterOld => &NEW_AFTER_OLD,
        }
    }
}

impl MergeStrategy for PlacementMerge {
    fn update_fragment(
        &self,
        model: &FragmentModel,
        incoming: &TimelineFragment,
    ) -> ModelResult<()> {
        model.set_attrs(incoming)
    }

    fn update_timeseries(
        &self,
        model: &TimeseriesModel,
        incoming: &TimelineTimeseries,
    ) -> ModelResult<()> {
        model.set_attrs(incoming)?;
        self.placement.merge_into(
            &mut model.fragment_guids_mut(),
            incoming.fragment_guids.iter().flatten(),
        );
        Ok(())
    }

    fn update_event(&self, model: &EventModel, incoming: &TimelineEvent) -> ModelResult<()> {
        model.set_attrs(incoming)
    }

    fn update_row(&self, model: &RowModel, incoming: &TimelineRow) -> ModelResult<()> {
        model.set_attrs(incoming)?;
        self.placement
            .merge_into(&mut model.event_guids_mut(), incoming.event_guids.iter().flatten());
        self.placement.merge_into(
            &mut model.timeseries_guids_mut(),
            incoming.timeseries_guids.iter().flatten(),
        );
        Ok(())
    }

    fn update_group(&self, model: &GroupModel, incoming: &TimelineGroup) -> ModelResult<()> {
        model.set_attrs(incoming)?;
        self.placement
            .merge_into(&mut model.row_guids_mut(), &incoming.row_guids);
        Ok(())
    }

    fn update_root(&self, model: &RootModel, incoming: &TimelineRoot) -> ModelResult<()> {
        model.set_attrs(incoming)?;
        self.placement
            .merge_into(&mut model.group_guids_mut(), &incoming.group_guids);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MergeOrder, MergeStrategy, NEW_AFTER_OLD, NEW_BEFORE_OLD};
    use crate::model::group::GroupModel;
    use crate::model::record::{TimelineGroup, TimelineRow};
    use crate::model::row::RowModel;

    fn row_with_events(events: &[&str]) -> TimelineRow {
        TimelineRow {
            event_guids: Some(events.iter().map(|guid| guid.to_string()).collect()),
            ..TimelineRow::new("r1", "Row")
        }
    }

    fn event_ids(model: &RowModel) -> Vec<String> {
        model.event_guids().to_array()
    }

    #[test]
    fn new_before_old_puts_incoming_first() {
        let model = RowModel::new(&row_with_events(&["e1", "e2"])).expect("row should build");
        NEW_BEFORE_OLD
            .update_row(&model, &row_with_events(&["e9"]))
            .expect("merge should succeed");
        assert_eq!(event_ids(&model), vec!["e9", "e1", "e2"]);
    }

    #[test]
    fn new_after_old_appends_incoming() {
        let model = RowModel::new(&row_with_events(&["e1", "e2"])).expect("row should build");
        NEW_AFTER_OLD
            .update_row(&model, &row_with_events(&["e9"]))
            .expect("merge should succeed");
        assert_eq!(event_ids(&model), vec!["e1", "e2", "e9"]);
    }

    #[test]
    fn both_policies_move_already_present_children() {
        let before = RowModel::new(&row_with_events(&["e1", "e2"])).expect("row should build");
        NEW_BEFORE_OLD
            .update_row(&before, &row_with_events(&["e2"]))
            .expect("merge should succeed");
        assert_eq!(event_ids(&before), vec!["e2", "e1"]);

        let after = RowModel::new(&row_with_events(&["e1", "e2"])).expect("row should build");
        NEW_AFTER_OLD
            .update_row(&after, &row_with_events(&["e1"]))
            .expect("merge should succeed");
        assert_eq!(event_ids(&after), vec!["e2", "e1"]);
    }

    #[test]
    fn group_update_overwrites_label_and_keeps_unmentioned_rows() {
        let group = GroupModel::new(&TimelineGroup {
            row_guids: vec!["r1".to_string(), "r2".to_string()],
            ..TimelineGroup::new("g1", "Old")
        })
        .expect("group should build");
        NEW_AFTER_OLD
            .update_group(
                &group,
                &TimelineGroup {
                    row_guids: vec!["r3".to_string()],
                    ..TimelineGroup::new("g1", "New")
                },
            )
            .expect("merge should succeed");
        assert_eq!(group.label(), "New");
        assert_eq!(group.row_guids().keys().collect::<Vec<_>>(), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn merge_order_parses_long_and_short_names() {
        assert_eq!(MergeOrder::parse("NEW_AFTER_OLD"), Some(MergeOrder::NewAfterOld));
        assert_eq!(MergeOrder::parse(" before "), Some(MergeOrder::NewBeforeOld));
        assert_eq!(MergeOrder::parse("new-after-old"), Some(MergeOrder::NewAfterOld));
        assert_eq!(MergeOrder::parse("sideways"), None);
        assert_eq!(MergeOrder::default().as_str(), "new_before_old");
    }
}

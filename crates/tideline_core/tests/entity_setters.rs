mod common;

use common::{count_fires, event, fragment, row, timeseries};
use tideline_core::{
    Axis1D, Color, EventModel, FragmentModel, GroupModel, RootModel, RowModel, TimelineEvent,
    TimelineGroup, TimelineRoot, TimeseriesModel,
};

const START_2014_MS: i64 = 1_388_534_400_000;
const HOUR_MS: i64 = 3_600_000;

fn two_sample_fragment() -> FragmentModel {
    FragmentModel::new(&fragment(
        "f1",
        &[1.0, 2.5],
        &["2014-01-01T00:00:00.000Z", "2014-01-01T01:00:00.000Z"],
    ))
    .unwrap()
}

#[test]
fn fragment_setters_fire_only_on_change() {
    let model = two_sample_fragment();
    let fired = count_fires(model.attrs_changed());

    model.set_data(vec![1.0, 2.5]);
    model.set_times_ms(vec![START_2014_MS, START_2014_MS + HOUR_MS]);
    assert_eq!(fired.get(), 0);

    model.set_data(vec![4.0, 2.5]);
    assert_eq!(fired.get(), 1);
    model.set_times_ms(vec![START_2014_MS]);
    assert_eq!(fired.get(), 2);
    assert_eq!(model.end_ms(), Some(START_2014_MS));
}

#[test]
fn fragment_set_attrs_fires_once() {
    let model = two_sample_fragment();
    let fired = count_fires(model.attrs_changed());

    model
        .set_attrs(&fragment("f1", &[7.0], &["2014-01-01T00:00:00Z"]))
        .unwrap();

    assert_eq!(fired.get(), 1);
    assert_eq!(&*model.data(), &[7.0]);
}

#[test]
fn timeseries_setters_fire_only_on_change() {
    let model = TimeseriesModel::new(&timeseries("ts1", &["f1"])).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_ui_hint(Some("lines".to_string()));
    model.set_baseline(Some(0.0));
    model.set_line_color(Some(Color::new(0.0, 0.0, 1.0, 1.0)));
    model.set_point_color(None);
    model.set_line_thickness(Some(2.0));
    model.set_point_size(None);
    assert_eq!(fired.get(), 0);

    model.set_baseline(Some(1.0));
    model.set_point_size(Some(3.0));
    model.set_line_color(None);
    assert_eq!(fired.get(), 3);
    assert_eq!(model.snapshot().line_color, None);
}

#[test]
fn timeseries_set_attrs_fires_once_and_keeps_fragment_refs() {
    let model = TimeseriesModel::new(&timeseries("ts1", &["f1"])).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_attrs(&timeseries("ts1", &["f9"])).unwrap();

    assert_eq!(fired.get(), 1);
    assert_eq!(model.fragment_guids().to_array(), vec!["f1"]);
}

#[test]
fn event_setters_fire_only_on_change() {
    let model = EventModel::new(&event("e1", "Launch")).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_label("Launch");
    model.set_user_editable(true);
    model.set_start_ms(START_2014_MS);
    model.set_label_icon(None);
    assert_eq!(fired.get(), 0);

    model.set_label("Abort");
    model.set_user_editable(false);
    assert_eq!(fired.get(), 2);

    model.set_interval(0, 10);
    model.set_interval(0, 10);
    assert_eq!(fired.get(), 3);
    assert_eq!((model.start_ms(), model.end_ms()), (0, 10));
}

#[test]
fn omitted_user_editable_is_already_false() {
    let model = EventModel::new(&TimelineEvent::new(
        "e1",
        "2014-01-01T00:00:00Z",
        "2014-01-01T00:00:00Z",
        "Event",
    ))
    .unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_user_editable(false);
    assert_eq!(fired.get(), 0);

    model.set_user_editable(true);
    assert_eq!(fired.get(), 1);
}

#[test]
fn row_setters_fire_only_on_change() {
    let model = RowModel::new(&row("r1", &["e1"], &[])).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_label("R1");
    model.set_ui_hint(None);
    model.set_data_axis(Axis1D::default());
    assert_eq!(fired.get(), 0);

    model.set_ui_hint(Some("compact".to_string()));
    model.set_label("Renamed");
    model.set_data_axis(Axis1D::new(0.0, 10.0));
    assert_eq!(fired.get(), 3);
}

#[test]
fn row_set_attrs_fires_once() {
    let model = RowModel::new(&row("r1", &["e1"], &[])).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_attrs(&row("r1", &[], &[])).unwrap();

    assert_eq!(fired.get(), 1);
    assert_eq!(model.event_guids().to_array(), vec!["e1"]);
}

#[test]
fn group_setters_fire_only_on_change() {
    let model = GroupModel::new(&TimelineGroup::new("g1", "G")).unwrap();
    let fired = count_fires(model.attrs_changed());

    model.set_collapsed(false);
    model.set_label("G");
    assert_eq!(fired.get(), 0);

    model.set_collapsed(true);
    model.set_collapsed(true);
    assert_eq!(fired.get(), 1);
    assert!(model.is_collapsed());

    model.set_attrs(&TimelineGroup::new("g1", "G")).unwrap();
    assert_eq!(fired.get(), 2);
    assert!(!model.is_collapsed());
}

#[test]
fn root_set_attrs_fires_once_per_call_and_list_edits_stay_silent() {
    let root = RootModel::new(&TimelineRoot::new(["g1"])).unwrap();
    let fired = count_fires(root.attrs_changed());

    root.set_attrs(&TimelineRoot::new(["g1"])).unwrap();
    assert_eq!(fired.get(), 1);

    root.group_guids_mut().add("g2".to_string());
    assert_eq!(fired.get(), 1);
    assert_eq!(root.snapshot().group_guids, vec!["g1", "g2"]);
}

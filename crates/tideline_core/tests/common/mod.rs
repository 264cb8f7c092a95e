#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use tideline_core::{
    Notification, Timeline, TimelineEvent, TimelineFragment, TimelineGroup, TimelineRoot,
    TimelineRow, TimelineTimeseries,
};

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Attaches a counting listener and returns the shared counter.
pub fn count_fires(notification: &Notification) -> Rc<Cell<usize>> {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    notification.on(move || counter.set(counter.get() + 1));
    fired
}

pub fn fragment(guid: &str, data: &[f64], times: &[&str]) -> TimelineFragment {
    TimelineFragment {
        data: data.to_vec(),
        times_iso8601: strings(times),
        ..TimelineFragment::new(guid)
    }
}

pub fn timeseries(guid: &str, fragments: &[&str]) -> TimelineTimeseries {
    TimelineTimeseries {
        ui_hint: Some("lines".to_string()),
        baseline: Some(0.0),
        line_color: Some("rgba(0,0,255,1)".to_string()),
        line_thickness: Some(2.0),
        fragment_guids: Some(strings(fragments)),
        ..TimelineTimeseries::new(guid)
    }
}

pub fn event(guid: &str, label: &str) -> TimelineEvent {
    TimelineEvent {
        user_editable: Some(true),
        fg_color: Some("rgba(255,255,255,1)".to_string()),
        bg_color: Some("rgba(255,0,0,0.5)".to_string()),
        ..TimelineEvent::new(
            guid,
            "2014-01-01T00:00:00.000Z",
            "2014-01-02T12:30:00.000Z",
            label,
        )
    }
}

pub fn row(guid: &str, events: &[&str], series: &[&str]) -> TimelineRow {
    TimelineRow {
        event_guids: Some(strings(events)),
        timeseries_guids: Some(strings(series)),
        ..TimelineRow::new(guid, guid.to_uppercase())
    }
}

pub fn group(guid: &str, rows: &[&str]) -> TimelineGroup {
    TimelineGroup {
        collapsed: Some(false),
        row_guids: strings(rows),
        ..TimelineGroup::new(guid, guid.to_uppercase())
    }
}

/// Canonical snapshot: every field is already in snapshot form, so
/// construct-then-snapshot reproduces it exactly.
pub fn sample_timeline() -> Timeline {
    Timeline {
        timeseries_fragments: vec![
            fragment(
                "f1",
                &[1.0, 2.5],
                &["2014-01-01T00:00:00.000Z", "2014-01-01T01:00:00.000Z"],
            ),
            fragment("f2", &[3.0], &["2014-01-01T02:00:00.000Z"]),
        ],
        timeseries: vec![timeseries("ts1", &["f1", "f2"])],
        events: vec![event("e1", "Launch"), event("e2", "Landing")],
        rows: vec![
            row("r1", &["e1", "e2"], &["ts1"]),
            row("r2", &[], &[]),
        ],
        groups: vec![group("g1", &["r1"]), group("g2", &["r2"])],
        root: TimelineRoot::new(["g1", "g2"]),
    }
}

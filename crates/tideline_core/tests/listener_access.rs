mod common;

use common::{group, sample_timeline};
use std::cell::RefCell;
use std::rc::Rc;
use tideline_core::{Timeline, TimelineModel, TimelineRoot, NEW_AFTER_OLD};

fn shared_model() -> Rc<TimelineModel> {
    Rc::new(TimelineModel::from_timeline(&sample_timeline()).unwrap())
}

#[test]
fn listener_reads_the_aggregate_while_replace_is_running() {
    let model = shared_model();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let weak = Rc::downgrade(&model);
    let log = Rc::clone(&seen);
    model.group("g1").unwrap().attrs_changed().on(move || {
        let Some(model) = weak.upgrade() else {
            return;
        };
        let label = model.group("g1").map(|group| group.label());
        log.borrow_mut()
            .push((label, model.groups().len(), model.root().group_guids().len()));
    });

    let mut incoming = sample_timeline();
    incoming.groups.truncate(1);
    incoming.groups[0].label = "Renamed".to_string();
    incoming.root = TimelineRoot::new(["g1"]);
    model.replace(&incoming).unwrap();

    // Pruning, root list included, finishes before the first update fires.
    assert_eq!(*seen.borrow(), vec![(Some("Renamed".to_string()), 1, 1)]);
    assert_eq!(model.snapshot(), incoming);
}

#[test]
fn listener_reads_entity_and_aggregate_from_inside_a_setter() {
    let model = shared_model();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let weak = Rc::downgrade(&model);
    let log = Rc::clone(&seen);
    let launch = model.event("e1").unwrap();
    launch.attrs_changed().on(move || {
        let Some(model) = weak.upgrade() else {
            return;
        };
        let snapshot = model.snapshot();
        log.borrow_mut().push(snapshot.events[0].label.clone());
    });

    launch.set_label("Launch (final)");
    launch.set_label("Launch (final)");

    assert_eq!(*seen.borrow(), vec!["Launch (final)"]);
}

#[test]
fn listener_may_write_another_entity_during_merge() {
    let model = shared_model();
    let weak = Rc::downgrade(&model);
    model.group("g1").unwrap().attrs_changed().on(move || {
        if let Some(row) = weak.upgrade().and_then(|model| model.row("r2")) {
            row.set_label("Touched");
        }
    });

    let incoming = Timeline {
        groups: vec![group("g1", &["r2"])],
        ..Timeline::default()
    };
    model.merge(&incoming, &NEW_AFTER_OLD).unwrap();

    assert_eq!(model.row("r2").unwrap().label(), "Touched");
    assert_eq!(
        model.group("g1").unwrap().row_guids().to_array(),
        vec!["r1", "r2"]
    );
}

#[test]
fn listener_may_edit_child_lists_of_the_entity_it_observes() {
    let model = shared_model();
    let weak = Rc::downgrade(&model);
    model.row("r1").unwrap().attrs_changed().on(move || {
        if let Some(row) = weak.upgrade().and_then(|model| model.row("r1")) {
            row.event_guids_mut().remove("e2");
        }
    });

    model.row("r1").unwrap().set_label("Trimmed");

    assert_eq!(model.row("r1").unwrap().event_guids().to_array(), vec!["e1"]);
}

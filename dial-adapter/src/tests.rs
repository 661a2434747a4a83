use crate::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dial::{DialOptions, Frame, ScrollSurface};

const CONTENT_WIDTH: f64 = 4000.0;
const VIEWPORT_WIDTH: f64 = 600.0;

type Log = Rc<RefCell<Vec<(i64, f64)>>>;

fn recording_driver(options: DialOptions) -> (Driver<SimSurface, impl FnMut(i64, Frame)>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let renderer = move |value: i64, frame: Frame| sink.borrow_mut().push((value, frame.origin_x));
    let driver = Driver::new(
        options,
        SimSurface::new(CONTENT_WIDTH, VIEWPORT_WIDTH),
        renderer,
    );
    (driver, log)
}

#[test]
fn sim_surface_clamps_to_content() {
    let mut surface = SimSurface::new(CONTENT_WIDTH, VIEWPORT_WIDTH);
    assert_eq!(surface.max_offset(), 3400.0);

    surface.scroll_to(-50.0);
    assert_eq!(surface.visible_rect().min_x(), 0.0);

    surface.scroll_to(5000.0);
    assert_eq!(surface.visible_rect().min_x(), 3400.0);

    surface.scroll_to(1234.0);
    assert_eq!(surface.visible_rect().min_x(), 1234.0);
    assert_eq!(surface.visible_rect().width, VIEWPORT_WIDTH);
}

#[test]
fn driver_bootstraps_and_renders_initial_window() {
    let (mut driver, log) = recording_driver(DialOptions::new());

    // Quiescent after construction, centered on the initial value.
    assert_eq!(driver.settle(), 0);
    assert!((driver.value_at_center() - 0.0).abs() < 1e-9);
    assert_eq!(driver.dial().first_value(), Some(-1));
    assert_eq!(driver.dial().last_value(), Some(1));

    // Bootstrap pass at offset zero, then the initial jump's rebuild.
    let log = log.borrow();
    let values: Vec<i64> = log.iter().map(|&(v, _)| v).collect();
    assert_eq!(values, [0, 1, 2, -1, 0, 1]);
}

#[test]
fn scroll_event_renders_only_new_units() {
    let (mut driver, log) = recording_driver(DialOptions::new());
    log.borrow_mut().clear();

    driver.scroll_by(50.0);
    assert_eq!(driver.settle(), 0);

    // One fresh unit appended on the right; the surviving units keep their
    // pixels and are not re-rendered.
    assert_eq!(*log.borrow(), [(2, 2300.0)]);
    assert!((driver.value_at_center() - 0.25).abs() < 1e-9);
}

#[test]
fn set_value_defers_until_tick() {
    let (mut driver, log) = recording_driver(DialOptions::new());
    driver.scroll_by(50.0);
    driver.settle();
    log.borrow_mut().clear();

    driver.set_value(5.25);
    assert!(driver.dial().has_pending_reposition());
    assert!((driver.value_at_center() - 0.25).abs() < 1e-9);
    assert!(log.borrow().is_empty());

    assert!(driver.tick());
    driver.settle();
    assert!((driver.value_at_center() - 5.25).abs() < 1e-9);
    let values: Vec<i64> = log.borrow().iter().map(|&(v, _)| v).collect();
    assert_eq!(values, [4, 5, 6, 7]);
}

#[test]
fn recenter_is_visually_silent() {
    let (mut driver, log) = recording_driver(DialOptions::new());

    // Drag the viewport midpoint past 75% of the surface.
    driver.on_scroll_event(2900.0);
    assert!(driver.dial().has_pending_reposition());
    let before = driver.value_at_center();
    log.borrow_mut().clear();

    assert!(driver.tick());
    assert_eq!(driver.settle(), 0);

    // The drift renumbered coordinates but changed nothing on screen.
    assert!(log.borrow().is_empty());
    assert!((driver.value_at_center() - before).abs() < 1e-9);
    assert_eq!(driver.surface().visible_rect().min_x(), 1700.0);
}

#[test]
fn driver_exposes_dial_and_parts() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let cb_log = Arc::clone(&log);
    let mut driver = Driver::new(
        DialOptions::new(),
        SimSurface::new(CONTENT_WIDTH, VIEWPORT_WIDTH),
        NullRenderer,
    );
    driver
        .dial_mut()
        .set_on_value_changed(Some(move |value: f64| cb_log.lock().unwrap().push(value)));

    driver.scroll_by(200.0);
    driver.settle();
    assert_eq!(*log.lock().unwrap(), [1.0]);

    let (dial, surface, _renderer) = driver.into_parts();
    assert_eq!(dial.first_value(), Some(-1));
    assert_eq!(surface.visible_rect().min_x(), 1900.0);
}

#[test]
fn bound_updates_rehome_through_the_driver() {
    let mut driver = Driver::new(
        DialOptions::new(),
        SimSurface::new(CONTENT_WIDTH, VIEWPORT_WIDTH),
        NullRenderer,
    );

    driver.set_max_value(-5);
    driver.settle();
    assert!((driver.value_at_center() - -5.0).abs() < 1e-9);

    let mut driver = Driver::new(
        DialOptions::new(),
        SimSurface::new(CONTENT_WIDTH, VIEWPORT_WIDTH),
        NullRenderer,
    );

    driver.set_min_value(10);
    driver.settle();
    assert!((driver.value_at_center() - 10.0).abs() < 1e-9);
}

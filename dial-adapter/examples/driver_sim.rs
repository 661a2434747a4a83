use dial::{DialOptions, Frame, ScrollSurface};
use dial_adapter::{Driver, SimSurface};

fn main() {
    // Example: a headless driver standing in for a host toolkit.
    //
    // A real adapter would:
    // - forward the scroll view's offset changes to on_scroll_event
    // - call tick() once per event-loop turn
    // - draw unit labels from the renderer callback
    let renderer = |value: i64, frame: Frame| {
        println!("render {value:>5} at x={:.0}", frame.origin_x);
    };
    let mut driver = Driver::new(
        DialOptions::new().with_bounds(-100, 100),
        SimSurface::new(4000.0, 600.0),
        renderer,
    );
    println!("bootstrapped: center={:.3}", driver.value_at_center());

    // Scrub right far enough to trip a recenter drift.
    for _ in 0..4 {
        driver.scroll_by(350.0);
        driver.settle();
    }
    println!(
        "after scrub: center={:.3} offset={:.0}",
        driver.value_at_center(),
        driver.surface().visible_rect().min_x()
    );

    // Jump close to the upper bound; the window pins against it.
    driver.set_value(99.6);
    driver.settle();
    println!(
        "after jump: center={:.3} window={:?}..={:?}",
        driver.value_at_center(),
        driver.dial().first_value(),
        driver.dial().last_value()
    );
}

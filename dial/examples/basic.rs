use dial::{Dial, DialOptions, ScrollSurface, VisibleRect};

/// A minimal stand-in for a host toolkit's scroll view.
struct Surface {
    content_width: f64,
    viewport: VisibleRect,
}

impl ScrollSurface for Surface {
    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn visible_rect(&self) -> VisibleRect {
        self.viewport
    }

    fn scroll_to(&mut self, origin_x: f64) {
        let max = self.content_width - self.viewport.width;
        self.viewport.origin_x = origin_x.clamp(0.0, max);
    }
}

fn main() {
    let mut surface = Surface {
        content_width: 4000.0,
        viewport: VisibleRect::new(0.0, 600.0),
    };
    let mut dial = Dial::new(
        DialOptions::new()
            .with_bounds(-100, 100)
            .with_on_value_changed(Some(|value: f64| println!("center -> {value:.3}"))),
    );

    // Bootstrap, then run the deferred initial jump.
    dial.on_viewport_changed(&surface);
    while dial.tick(&mut surface) {}

    // Simulate a user scrubbing right.
    for _ in 0..5 {
        let target = surface.visible_rect().min_x() + 150.0;
        surface.scroll_to(target);
        dial.on_viewport_changed(&surface);
        while dial.tick(&mut surface) {}
    }

    // Programmatic jump near the upper bound.
    dial.set_value(99.6);
    while dial.tick(&mut surface) {}

    println!("window: {}..={} units", dial.first_value().unwrap(), dial.last_value().unwrap());
    println!("value at center: {:.3}", dial.value_at_center(&surface));
}

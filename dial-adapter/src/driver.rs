use dial::{Dial, DialOptions, ScrollSurface};

use crate::Renderer;

/// A framework-neutral driver that wraps a [`Dial`] together with its scroll
/// surface and a renderer.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - [`Driver::on_scroll_event`] when the host reports a scroll offset change
/// - [`Driver::tick`] each frame/event-loop turn (to run deferred
///   repositioning)
///
/// After every event and tick the driver drains the dial's dirty units into
/// the renderer, so hosts never have to track redraw state themselves.
#[derive(Debug)]
pub struct Driver<S, R> {
    dial: Dial,
    surface: S,
    renderer: R,
}

impl<S: ScrollSurface, R: Renderer> Driver<S, R> {
    /// Creates a driver and bootstraps the window.
    ///
    /// The initial jump (placing `options.initial_value` under the center) is
    /// queued by the bootstrap and executed here, so the driver comes back
    /// quiescent with the initial window already rendered.
    pub fn new(options: DialOptions, surface: S, renderer: R) -> Self {
        let mut driver = Self {
            dial: Dial::new(options),
            surface,
            renderer,
        };
        driver.dial.on_viewport_changed(&driver.surface);
        driver.render_pass();
        driver.settle();
        driver
    }

    pub fn dial(&self) -> &Dial {
        &self.dial
    }

    pub fn dial_mut(&mut self) -> &mut Dial {
        &mut self.dial
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (Dial, S, R) {
        (self.dial, self.surface, self.renderer)
    }

    /// Call this when the host reports a new scroll offset (user wheel/drag).
    pub fn on_scroll_event(&mut self, origin_x: f64) {
        self.surface.scroll_to(origin_x);
        self.dial.on_viewport_changed(&self.surface);
        self.render_pass();
    }

    /// Scrolls by a delta relative to the current offset.
    pub fn scroll_by(&mut self, dx: f64) {
        let target = self.surface.visible_rect().min_x() + dx;
        self.on_scroll_event(target);
    }

    /// Runs one deferred reposition, if any. Returns whether work ran.
    pub fn tick(&mut self) -> bool {
        let ran = self.dial.tick(&mut self.surface);
        if ran {
            self.render_pass();
        }
        ran
    }

    /// Ticks until no repositioning remains. Returns the number of ticks run.
    ///
    /// A jump's trailing viewport sync can schedule a follow-up drift, so one
    /// event can take a couple of ticks to fully settle.
    pub fn settle(&mut self) -> usize {
        let mut ran = 0;
        while self.tick() {
            ran += 1;
        }
        ran
    }

    pub fn set_value(&mut self, value: f64) {
        self.dial.set_value(value);
    }

    pub fn set_min_value(&mut self, new_min: i64) {
        self.dial.set_min_value(new_min, &self.surface);
    }

    pub fn set_max_value(&mut self, new_max: i64) {
        self.dial.set_max_value(new_max, &self.surface);
    }

    pub fn value_at_center(&self) -> f64 {
        self.dial.value_at_center(&self.surface)
    }

    fn render_pass(&mut self) {
        let Self {
            dial, renderer, ..
        } = self;
        dial.for_each_dirty_unit(|value, frame| renderer.render(value, frame));
    }
}

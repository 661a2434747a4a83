use dial::Frame;

/// The render-a-unit capability.
///
/// The dial core treats unit content as opaque. Whenever a unit is created or
/// renumbered it is marked dirty, and the [`Driver`](crate::Driver) drains the
/// dirty set into this trait after every event and tick. A `render` call means
/// "the segment at `frame` now represents `value`, redraw it".
///
/// Drift repositioning shifts frames without changing what a unit displays, so
/// it produces no `render` calls.
pub trait Renderer {
    fn render(&mut self, value: i64, frame: Frame);
}

impl<F: FnMut(i64, Frame)> Renderer for F {
    fn render(&mut self, value: i64, frame: Frame) {
        self(value, frame);
    }
}

/// A renderer that discards everything. Useful when only the dial's value
/// tracking matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _value: i64, _frame: Frame) {}
}

use crate::Frame;

/// One renderable integer-valued segment of the infinite scroll.
///
/// A unit is a pure data holder: the logical number it represents plus its
/// horizontal placement inside the content surface. Assigning a value marks
/// the unit as needing a redraw; repositioning during a drift does not, since
/// a drift preserves the unit's visual content and only renumbers its stored
/// coordinate.
#[derive(Clone, Debug)]
pub struct Unit {
    value: i64,
    frame: Frame,
    needs_redraw: bool,
}

impl Unit {
    pub(crate) fn new(value: i64, frame: Frame) -> Self {
        Self {
            value,
            frame,
            needs_redraw: true,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Clears the redraw flag, returning whether it was set.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.needs_redraw, false)
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
        self.needs_redraw = true;
    }

    pub(crate) fn set_origin_x(&mut self, origin_x: f64) {
        self.frame.origin_x = origin_x;
    }

    pub(crate) fn shift_x(&mut self, delta: f64) {
        self.frame.origin_x += delta;
    }
}

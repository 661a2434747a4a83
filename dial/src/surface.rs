use crate::VisibleRect;

/// The host toolkit's scrollable surface, as seen by the dial.
///
/// The dial assumes a fixed-width content surface (large relative to the
/// viewport, e.g. 4000 logical pixels) with a variable visible rectangle.
/// The host must notify the dial of every visible-rect origin change via
/// [`crate::Dial::on_viewport_changed`], and drive deferred repositioning
/// via [`crate::Dial::tick`].
pub trait ScrollSurface {
    /// Width of the full content surface.
    fn content_width(&self) -> f64;

    /// The currently visible horizontal span, in content coordinates.
    fn visible_rect(&self) -> VisibleRect;

    /// Scrolls so the visible rect's left edge lands at `origin_x`.
    ///
    /// Implementations are expected to clamp the target to
    /// `[0, content_width - viewport width]`, the way a real scroll view
    /// pins its document at the edges.
    fn scroll_to(&mut self, origin_x: f64);
}

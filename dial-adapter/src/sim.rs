use dial::{ScrollSurface, VisibleRect};

/// An in-memory scroll surface.
///
/// Models the one piece of host state the dial needs: a fixed-width content
/// strip with a viewport sliding over it. `scroll_to` clamps to
/// `[0, content_width - viewport_width]`, like a real scroll view pinned at
/// its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSurface {
    content_width: f64,
    viewport: VisibleRect,
}

impl SimSurface {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        debug_assert!(content_width >= viewport_width);
        Self {
            content_width,
            viewport: VisibleRect::new(0.0, viewport_width),
        }
    }

    /// The largest scroll offset the surface accepts.
    pub fn max_offset(&self) -> f64 {
        self.content_width - self.viewport.width
    }
}

impl ScrollSurface for SimSurface {
    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn visible_rect(&self) -> VisibleRect {
        self.viewport
    }

    fn scroll_to(&mut self, origin_x: f64) {
        self.viewport.origin_x = origin_x.clamp(0.0, self.max_offset());
    }
}

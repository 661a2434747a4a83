/// Horizontal placement of a unit inside the content surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub origin_x: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(origin_x: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin_x
    }

    pub fn max_x(&self) -> f64 {
        self.origin_x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        self.origin_x + self.width / 2.0
    }
}

/// The horizontal span of the viewport within the content surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRect {
    pub origin_x: f64,
    pub width: f64,
}

impl VisibleRect {
    pub fn new(origin_x: f64, width: f64) -> Self {
        Self { origin_x, width }
    }

    pub fn min_x(&self) -> f64 {
        self.origin_x
    }

    pub fn max_x(&self) -> f64 {
        self.origin_x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        self.origin_x + self.width / 2.0
    }
}

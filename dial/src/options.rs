use std::sync::Arc;

/// A callback fired with the fractional value under the viewport center,
/// after every settled viewport change or jump.
pub type OnValueChanged = Arc<dyn Fn(f64) + Send + Sync>;

/// Configuration for [`crate::Dial`].
///
/// Callback fields are stored in `Arc`s so options stay cheap to clone.
#[derive(Clone)]
pub struct DialOptions {
    /// Inclusive lower bound of the logical range.
    pub min_value: i64,
    /// Inclusive upper bound of the logical range.
    pub max_value: i64,
    /// The value placed under the viewport center when the window bootstraps.
    pub initial_value: f64,
    /// Fixed width of one unit segment, used for all value/pixel conversion.
    pub unit_width: f64,
    /// Height assigned to unit frames (typically the surface height).
    pub unit_height: f64,
    /// Optional delegate notified with `value_at_center` after every settled
    /// viewport change or jump.
    pub on_value_changed: Option<OnValueChanged>,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DialOptions {
    pub fn new() -> Self {
        Self {
            min_value: -1000,
            max_value: 1000,
            initial_value: 0.0,
            unit_width: 200.0,
            unit_height: 100.0,
            on_value_changed: None,
        }
    }

    /// Sets the inclusive logical bounds.
    ///
    /// Requires `min_value < max_value`.
    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_unit_width(mut self, unit_width: f64) -> Self {
        self.unit_width = unit_width;
        self
    }

    pub fn with_unit_height(mut self, unit_height: f64) -> Self {
        self.unit_height = unit_height;
        self
    }

    pub fn with_on_value_changed(
        mut self,
        on_value_changed: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_value_changed = on_value_changed.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for DialOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DialOptions")
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("initial_value", &self.initial_value)
            .field("unit_width", &self.unit_width)
            .field("unit_height", &self.unit_height)
            .finish_non_exhaustive()
    }
}

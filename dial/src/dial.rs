use std::collections::VecDeque;

use crate::{DialOptions, Frame, ScrollSurface, Unit};

/// State of the deferred-reposition machine.
///
/// While `Repositioning`, viewport-changed notifications and value-set
/// requests are ignored so a reposition's own scroll mutation cannot re-enter
/// the drift/jump logic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriftState {
    #[default]
    Idle,
    Repositioning,
}

/// A queued reposition, run on the next [`Dial::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
enum Reposition {
    Center,
    Begin,
    End,
    Jump(f64),
}

/// The dial's window controller.
///
/// `Dial` owns the materialized window of [`Unit`]s, the logical value range,
/// and the recentering/clamping algorithms. It holds no UI objects: the host
/// provides viewport geometry through a [`ScrollSurface`] and drives the dial
/// with two calls:
///
/// - [`Dial::on_viewport_changed`] whenever the visible rect's origin moves
/// - [`Dial::tick`] once per event-loop turn, to run deferred repositioning
///
/// Repositioning (drifts and value jumps) is never applied inside the event
/// that requested it. It is queued and executed on the next tick, after the
/// surface's viewport has settled, with the whole mutation masked by
/// [`DriftState::Repositioning`] so no partial state is observable.
#[derive(Clone, Debug)]
pub struct Dial {
    options: DialOptions,
    units: VecDeque<Unit>,
    state: DriftState,
    pending: Option<Reposition>,
}

impl Dial {
    /// Creates a dial from options.
    ///
    /// The window starts empty; it bootstraps on the first
    /// [`Dial::on_viewport_changed`] (or [`Dial::define_units`]) call, placing
    /// `options.initial_value` under the viewport center.
    pub fn new(options: DialOptions) -> Self {
        assert!(
            options.min_value < options.max_value,
            "dial bounds must satisfy min_value < max_value (got {}..{})",
            options.min_value,
            options.max_value,
        );
        assert!(
            options.unit_width > 0.0,
            "dial unit_width must be positive (got {})",
            options.unit_width,
        );
        ddebug!(
            min = options.min_value,
            max = options.max_value,
            unit_width = options.unit_width,
            "Dial::new"
        );
        Self {
            options,
            units: VecDeque::new(),
            state: DriftState::Idle,
            pending: None,
        }
    }

    pub fn options(&self) -> &DialOptions {
        &self.options
    }

    pub fn min_value(&self) -> i64 {
        self.options.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.options.max_value
    }

    pub fn drift_state(&self) -> DriftState {
        self.state
    }

    pub fn is_repositioning(&self) -> bool {
        self.state == DriftState::Repositioning
    }

    /// Whether a reposition is queued for the next tick.
    pub fn has_pending_reposition(&self) -> bool {
        self.pending.is_some()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Value of the leftmost materialized unit, if the window is non-empty.
    pub fn first_value(&self) -> Option<i64> {
        self.units.front().map(Unit::value)
    }

    /// Value of the rightmost materialized unit, if the window is non-empty.
    pub fn last_value(&self) -> Option<i64> {
        self.units.back().map(Unit::value)
    }

    /// Iterates over the window left-to-right without allocations.
    pub fn for_each_unit(&self, mut f: impl FnMut(&Unit)) {
        for unit in &self.units {
            f(unit);
        }
    }

    /// Drains redraw flags, yielding `(value, frame)` for every dirty unit.
    ///
    /// This is the renderer seam: newly created units and value-renumbered
    /// units come out dirty; drift shifts do not, since they preserve the
    /// unit's on-screen content.
    pub fn for_each_dirty_unit(&mut self, mut f: impl FnMut(i64, Frame)) {
        for unit in &mut self.units {
            if unit.take_redraw() {
                f(unit.value(), unit.frame());
            }
        }
    }

    pub fn set_on_value_changed(
        &mut self,
        on_value_changed: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) {
        self.options.on_value_changed = on_value_changed.map(|f| std::sync::Arc::new(f) as _);
    }

    fn first(&self) -> &Unit {
        self.units.front().expect("dial window is empty")
    }

    fn last(&self) -> &Unit {
        self.units.back().expect("dial window is empty")
    }

    /// Half the viewport, expressed in unit widths.
    fn balance(&self, viewport_width: f64) -> f64 {
        (viewport_width / 2.0) / self.options.unit_width
    }

    fn schedule(&mut self, action: Reposition) {
        // An explicit value jump outranks housekeeping drifts; among drifts,
        // the one scheduled last wins.
        if matches!(self.pending, Some(Reposition::Jump(_)))
            && !matches!(action, Reposition::Jump(_))
        {
            return;
        }
        dtrace!(?action, "schedule reposition");
        self.pending = Some(action);
    }

    /// Handles a viewport-origin change reported by the host.
    ///
    /// Ignored while a reposition is running. Otherwise: schedules at most one
    /// drift, reports [`Dial::value_at_center`] to the delegate, and finishes
    /// by reconciling the window via [`Dial::define_units`].
    pub fn on_viewport_changed<S: ScrollSurface>(&mut self, surface: &S) {
        if self.state == DriftState::Repositioning {
            return;
        }

        if !self.units.is_empty() {
            // Priority matches the reference behavior at the range ends:
            // begin over end over center.
            if self.first().value() <= self.options.min_value {
                self.schedule(Reposition::Begin);
            } else if self.last().value() >= self.options.max_value {
                self.schedule(Reposition::End);
            } else {
                self.drift_to_center(surface);
            }

            let value = self.value_at_center(surface);
            dtrace!(value, "viewport changed");
            if let Some(cb) = &self.options.on_value_changed {
                cb(value);
            }
        }

        self.define_units(surface);
    }

    /// Runs the queued reposition, if any. Returns whether work ran.
    ///
    /// The host calls this once per event-loop turn, after the event that
    /// scheduled the reposition has finished and the viewport has settled.
    /// Jumps finish by re-syncing through [`Dial::on_viewport_changed`];
    /// drifts are visually neutral and finish silently.
    pub fn tick<S: ScrollSurface>(&mut self, surface: &mut S) -> bool {
        let Some(action) = self.pending.take() else {
            return false;
        };
        ddebug!(?action, "tick");

        self.state = DriftState::Repositioning;
        match action {
            Reposition::Center => self.run_drift_center(surface),
            Reposition::Begin => self.run_drift_begin(surface),
            Reposition::End => self.run_drift_end(surface),
            Reposition::Jump(value) => self.run_jump(surface, value),
        }
        self.state = DriftState::Idle;

        if matches!(action, Reposition::Jump(_)) {
            self.on_viewport_changed(surface);
        }
        true
    }

    /// The window-maintenance routine.
    ///
    /// Bootstraps an empty window, then grows and shrinks both edges so the
    /// union of unit frames exactly covers the visible rect (with at most one
    /// partially overlapping unit per edge). Steps always run in this fixed
    /// order; growth and shrink are independent per edge, so a fast
    /// programmatic jump can trigger both in one call.
    pub fn define_units<S: ScrollSurface>(&mut self, surface: &S) {
        let visible = surface.visible_rect();

        if self.units.is_empty() {
            self.place_on_right(visible.min_x());
            self.set_value(self.options.initial_value);
        }

        let mut right_edge = self.last().frame().max_x();
        while right_edge < visible.max_x() {
            right_edge = self.place_on_right(right_edge);
        }

        let mut left_edge = self.first().frame().min_x();
        while left_edge > visible.min_x() {
            left_edge = self.place_on_left(left_edge);
        }

        while self.last().frame().min_x() > visible.max_x() {
            self.units.pop_back();
        }

        while self.first().frame().max_x() < visible.min_x() {
            self.units.pop_front();
        }
    }

    /// Appends a unit flush against `right_edge`; returns the new right edge.
    fn place_on_right(&mut self, right_edge: f64) -> f64 {
        let value = match self.units.back() {
            Some(prev) => prev.value() + 1,
            None => 0,
        };
        let frame = Frame::new(right_edge, self.options.unit_width, self.options.unit_height);
        let max_x = frame.max_x();
        self.units.push_back(Unit::new(value, frame));
        max_x
    }

    /// Prepends a unit flush against `left_edge`; returns the new left edge.
    fn place_on_left(&mut self, left_edge: f64) -> f64 {
        let value = self.first().value() - 1;
        let frame = Frame::new(
            left_edge - self.options.unit_width,
            self.options.unit_width,
            self.options.unit_height,
        );
        let min_x = frame.min_x();
        self.units.push_front(Unit::new(value, frame));
        min_x
    }

    /// Returns the fractional logical value under the pixel center of the
    /// visible rect.
    ///
    /// Panics if the window is empty; callers must bootstrap via
    /// [`Dial::define_units`] first.
    pub fn value_at_center<S: ScrollSurface>(&self, surface: &S) -> f64 {
        let visible = surface.visible_rect();
        let first = self.first();
        let interval = (visible.min_x() - first.frame().min_x()) / self.options.unit_width;
        // The -0.5 corrects for a unit's label sitting at its visual center
        // rather than its left edge.
        first.value() as f64 + interval + self.balance(visible.width) - 0.5
    }

    /// Requests a jump so `new_value` lands under the viewport center.
    ///
    /// The value is clamped to `[min_value, max_value]` and the jump is queued
    /// for the next tick. Ignored while a reposition is running or before the
    /// window has bootstrapped.
    pub fn set_value(&mut self, new_value: f64) {
        if self.state == DriftState::Repositioning || self.units.is_empty() {
            return;
        }
        let value = new_value.clamp(self.options.min_value as f64, self.options.max_value as f64);
        ddebug!(requested = new_value, value, "set_value");
        self.schedule(Reposition::Jump(value));
    }

    /// Updates the lower bound, ignoring the request unless it keeps
    /// `min_value < max_value`.
    ///
    /// The window is re-homed immediately: if the current center value falls
    /// below the new bound it snaps to the bound, otherwise it is preserved.
    pub fn set_min_value<S: ScrollSurface>(&mut self, new_min: i64, surface: &S) {
        if new_min >= self.options.max_value {
            return;
        }
        self.options.min_value = new_min;
        if self.units.is_empty() {
            return;
        }
        let center = self.value_at_center(surface);
        if center < new_min as f64 {
            self.set_value(new_min as f64);
        } else {
            self.set_value(center);
        }
    }

    /// Updates the upper bound, ignoring the request unless it keeps
    /// `min_value < max_value`.
    pub fn set_max_value<S: ScrollSurface>(&mut self, new_max: i64, surface: &S) {
        if new_max <= self.options.min_value {
            return;
        }
        self.options.max_value = new_max;
        if self.units.is_empty() {
            return;
        }
        let center = self.value_at_center(surface);
        if center > new_max as f64 {
            self.set_value(new_max as f64);
        } else {
            self.set_value(center);
        }
    }

    /// Schedules a recenter when the viewport midpoint has wandered outside
    /// the middle 50% of the content surface.
    ///
    /// Without this, continuous scrolling would walk the offset into the
    /// surface's edge and starve unit creation.
    fn drift_to_center<S: ScrollSurface>(&mut self, surface: &S) {
        let content = surface.content_width();
        let mid = surface.visible_rect().mid_x();
        if mid < content * 0.25 || mid > content * 0.75 {
            self.schedule(Reposition::Center);
        }
    }

    fn run_drift_center<S: ScrollSurface>(&mut self, surface: &mut S) {
        let content = surface.content_width();
        let visible = surface.visible_rect();
        let centered = (content - visible.width) / 2.0;
        let delta = centered - visible.min_x();
        dtrace!(delta, "drift to center");
        surface.scroll_to(centered);
        for unit in &mut self.units {
            unit.shift_x(delta);
        }
    }

    /// Snaps the `min_value` unit to a fixed anchor near the surface's left
    /// edge and renumbers the window contiguously from it, so the user cannot
    /// scroll past the lower bound.
    fn run_drift_begin<S: ScrollSurface>(&mut self, surface: &mut S) {
        let visible = surface.visible_rect();
        let unit_width = self.options.unit_width;
        let anchor = unit_width * (self.balance(visible.width) - 0.5);

        let first = self.first();
        if first.frame().min_x() <= anchor {
            return;
        }
        dtrace!(anchor, "drift to beginning");

        surface.scroll_to(visible.min_x() - first.frame().min_x() + anchor);
        let min_value = self.options.min_value;
        for (i, unit) in self.units.iter_mut().enumerate() {
            unit.set_origin_x(i as f64 * unit_width + anchor);
            unit.set_value(min_value + i as i64);
        }
    }

    /// Mirror of [`Dial::run_drift_begin`] for the upper bound, anchored near
    /// the surface's right edge.
    fn run_drift_end<S: ScrollSurface>(&mut self, surface: &mut S) {
        let content = surface.content_width();
        let visible = surface.visible_rect();
        let unit_width = self.options.unit_width;
        let anchor = unit_width * (self.balance(visible.width) - 0.5);

        let last = self.last();
        if last.frame().min_x() >= (content - unit_width) - anchor {
            return;
        }
        dtrace!(anchor, "drift to end");

        surface.scroll_to(
            (content + (visible.max_x() - last.frame().max_x())) - visible.width - anchor,
        );
        let len = self.units.len() as i64;
        let max_value = self.options.max_value;
        for (i, unit) in self.units.iter_mut().enumerate() {
            let origin = content - (len as f64 * unit_width) + i as f64 * unit_width;
            unit.set_origin_x(origin - anchor);
            unit.set_value(max_value - len + i as i64 + 1);
        }
    }

    /// Executes a queued value jump.
    ///
    /// Three mutually exclusive branches: near the lower bound the window is
    /// anchored so `min_value` sits under the center exactly at scroll offset
    /// zero; in the interior the surface is recentered and a single fresh
    /// unit placed with sub-unit pixel correction; near the upper bound the
    /// window is anchored against the fixed end position computed from
    /// `max_value`. Each branch rebuilds the window to one unit and backfills
    /// via [`Dial::define_units`].
    fn run_jump<S: ScrollSurface>(&mut self, surface: &mut S, value: f64) {
        let unit_width = self.options.unit_width;
        let content = surface.content_width();
        let visible = surface.visible_rect();
        let balance = self.balance(visible.width);
        let min = self.options.min_value as f64;
        let max = self.options.max_value as f64;

        if value < min + balance {
            let value_at_left = value - balance;
            let value_at_begin = min - balance;
            let first_value = (value_at_left + 0.5).floor();
            let begin_value = (value_at_begin + 0.5).floor();
            let begin_origin = (begin_value - value_at_begin - 0.5) * unit_width;
            let offset = ((value_at_left - value_at_begin) * unit_width).round();
            let first_origin = if first_value > begin_value {
                (first_value - begin_value) * unit_width + begin_origin
            } else {
                begin_origin
            };

            surface.scroll_to(offset);
            self.rebuild_single(first_value as i64, first_origin.round());
        } else if value > max - balance {
            let value_at_left = value - balance;
            let first_value = value_at_left.floor();
            let first_origin = content - ((max + balance) - first_value + 0.5) * unit_width;
            let offset_to_left = (value_at_left - first_value + 0.5) * unit_width;

            surface.scroll_to((first_origin + offset_to_left).round());
            self.rebuild_single(first_value as i64, first_origin.round());
        } else {
            let centered = (content - visible.width) / 2.0;
            let value_at_left = value - balance + 0.5;
            let first_value = value_at_left.floor();
            let sub_unit_pixels = (value_at_left - first_value) * unit_width;

            surface.scroll_to(centered);
            let settled = surface.visible_rect();
            self.rebuild_single(first_value as i64, settled.min_x() - sub_unit_pixels);
        }

        self.define_units(surface);
    }

    fn rebuild_single(&mut self, value: i64, origin_x: f64) {
        self.units.clear();
        let frame = Frame::new(origin_x, self.options.unit_width, self.options.unit_height);
        self.units.push_back(Unit::new(value, frame));
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Vec<(i64, f64)> {
        self.units
            .iter()
            .map(|u| (u.value(), u.frame().origin_x))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn assert_window_invariants(&self, visible: crate::VisibleRect) {
        assert!(!self.units.is_empty(), "window must not be empty");
        let mut prev: Option<&Unit> = None;
        for unit in &self.units {
            if let Some(p) = prev {
                assert_eq!(
                    unit.value(),
                    p.value() + 1,
                    "window values must be contiguous",
                );
                let gap = (unit.frame().min_x() - p.frame().max_x()).abs();
                assert!(gap < 1e-6, "window frames must be contiguous (gap {gap})");
            }
            prev = Some(unit);
        }
        let first = self.units.front().unwrap();
        let last = self.units.back().unwrap();
        assert!(
            first.frame().min_x() <= visible.min_x() + 1e-6,
            "window must cover the viewport's left edge",
        );
        assert!(
            last.frame().max_x() >= visible.max_x() - 1e-6,
            "window must cover the viewport's right edge",
        );
        if self.units.len() > 1 {
            assert!(
                self.units[1].frame().min_x() >= visible.min_x() - 1e-6,
                "only the first unit may extend past the viewport's left edge",
            );
            assert!(
                self.units[self.units.len() - 2].frame().max_x() <= visible.max_x() + 1e-6,
                "only the last unit may extend past the viewport's right edge",
            );
        }
    }
}

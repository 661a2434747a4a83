//! A headless infinite-scroll dial engine.
//!
//! For adapter-level glue (drivers, render passes, a simulated surface), see the
//! `dial-adapter` crate.
//!
//! This crate implements the windowing algorithm behind a horizontally infinite
//! "dial" control: a number line the user can scroll through an unbounded (but
//! clamped) integer range. It maintains a small window of renderable units
//! covering the viewport, recycles units as the viewport moves, periodically
//! re-centers the scroll offset so content coordinates stay bounded, and
//! converts between scroll-offset space and fractional value space.
//!
//! It is UI-agnostic. A host toolkit is expected to provide, via
//! [`ScrollSurface`]:
//! - a fixed-width scrollable content surface
//! - the currently visible rectangle
//! - a scroll-to-offset operation
//!
//! and to call [`Dial::on_viewport_changed`] on scroll notifications and
//! [`Dial::tick`] once per event-loop turn to run deferred repositioning.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dial;
mod options;
mod surface;
mod types;
mod unit;


pub use dial::{Dial, DriftState};
pub use options::{DialOptions, OnValueChanged};
pub use surface::ScrollSurface;
pub use types::{Frame, VisibleRect};
pub use unit::Unit;

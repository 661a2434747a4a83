//! Adapter utilities for the `dial` crate.
//!
//! The `dial` crate is UI-agnostic and focuses on the core windowing math and
//! state. This crate provides small, framework-neutral helpers commonly needed
//! by host adapters:
//!
//! - [`Driver`]: owns a dial, a scroll surface and a renderer, and wires the
//!   scroll-event / tick / render-pass flow so a host only forwards events
//! - [`Renderer`]: the render-a-unit capability, with a blanket impl for
//!   closures
//! - [`SimSurface`]: an in-memory scroll surface for tests, examples and
//!   prototyping
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

mod driver;
mod renderer;
mod sim;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use renderer::{NullRenderer, Renderer};
pub use sim::SimSurface;

//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and leaves track animation and viewport observation to
//! its host. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-driven track animation that settles transitions on completion ([`Controller`])
//! - Viewport width to breakpoint tracking ([`BreakpointWatcher`])
//!
//! This crate is intentionally framework-agnostic (no DOM or GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod breakpoint;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use breakpoint::BreakpointWatcher;
pub use carousel::Easing;
pub use controller::{Controller, Frame};
pub use tween::Tween;

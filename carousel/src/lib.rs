//! A headless carousel engine.
//!
//! This crate holds the state machine behind responsive, infinitely looping and tabbed
//! carousels: the index space over a finite set of panels that must appear endless, the track
//! geometry per responsive breakpoint, a single in-flight transition guard shared by every input
//! source (Prev/Next, tabs, keyboard, swipe, autorotation), and the accessibility attributes
//! that must mirror the visible panels at every step.
//!
//! It is UI-agnostic. A host (DOM binding, TUI, GUI toolkit) is expected to:
//! - report the markup it found and the current breakpoint
//! - forward input as [`Command`]s and tab key presses
//! - animate the track between the offsets of a started [`Transition`] and report completion
//! - mirror [`Accessibility`] onto its elements and honor [`FocusTarget`]s
//!
//! For tween-driven hosts and breakpoint watching, see the `carousel-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod a11y;
mod autorotate;
mod breakpoint;
mod buffer;
mod carousel;
mod error;
mod events;
mod geometry;
mod options;
mod panel;
mod state;
mod transition;
mod types;


pub use a11y::{Accessibility, NavAttrs, PanelAttrs, Role, RootAttrs, TabAttrs, TabIndex};
pub use autorotate::AutoRotation;
pub use breakpoint::{Breakpoint, BreakpointThresholds};
pub use buffer::{ActiveSet, Advance, LoopBuffer};
pub use carousel::{Carousel, Teardown};
pub use error::{CarouselError, Element};
pub use events::{CarouselEvent, FocusTarget, PanelRef};
pub use geometry::Geometry;
pub use options::{CarouselOptions, EventCallback};
pub use panel::{Markup, Panel};
pub use state::CarouselState;
pub use transition::{IgnoreReason, Outcome, Settled, Transition};
pub use types::{BreakpointLayouts, Command, Easing, Key, Layout, SwipeDirection};

use crate::{Command, Easing, FocusTarget, PanelRef};

/// An accepted command, from the moment it starts moving the track until it settles.
///
/// The host animates the track offset from `from` to `to` over `duration_ms` and calls
/// [`crate::Carousel::complete_transition`] when the animation completes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub command: Command,
    /// Buffer index the move starts from (after any re-home).
    pub previous_index: usize,
    /// Buffer index of the first visible panel once settled.
    pub target_index: usize,
    /// Offset the track must jump to, without animation, before animating. Set when the loop
    /// buffer re-homed the move.
    pub jump_to: Option<f32>,
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
    pub easing: Easing,
    pub active: PanelRef,
    /// Focus follows the new panel when the transition settles.
    pub user_initiated: bool,
}

/// Why a command did not start a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoreReason {
    /// A transition is already in flight.
    Busy,
    /// The originating control is disabled.
    Disabled,
    SwipeDisabled,
    /// The command would not move the track.
    Unchanged,
    /// The command names a tab that does not exist.
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// No state change; the host only moves focus.
    Focused(FocusTarget),
    Started(Transition),
}

impl Outcome {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Started(t) => Some(t),
            _ => None,
        }
    }

    pub fn focus(&self) -> Option<&FocusTarget> {
        match self {
            Self::Focused(target) => Some(target),
            _ => None,
        }
    }
}

/// Result of completing a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Settled {
    pub active: PanelRef,
    pub focus: Option<FocusTarget>,
    /// Offset the track must jump to when geometry changed while the animation was running.
    pub correction: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Phase {
    Idle,
    Transitioning(Transition),
}

use crate::{Breakpoint, CarouselError};

/// How many panels a breakpoint tier shows at once, and how many one navigation step moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub num_visible: usize,
    pub num_step: usize,
}

impl Layout {
    pub const SINGLE: Self = Self::new(1, 1);

    pub const fn new(num_visible: usize, num_step: usize) -> Self {
        Self {
            num_visible,
            num_step,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Per-breakpoint layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointLayouts {
    pub mobile: Layout,
    pub tablet: Layout,
    pub desktop: Layout,
}

impl BreakpointLayouts {
    pub const fn uniform(layout: Layout) -> Self {
        Self {
            mobile: layout,
            tablet: layout,
            desktop: layout,
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Layout {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    pub fn with(mut self, breakpoint: Breakpoint, layout: Layout) -> Self {
        match breakpoint {
            Breakpoint::Mobile => self.mobile = layout,
            Breakpoint::Tablet => self.tablet = layout,
            Breakpoint::Desktop => self.desktop = layout,
        }
        self
    }

    /// Checks every tier, so that no later breakpoint change can land on an unusable layout.
    pub fn validate(&self) -> Result<(), CarouselError> {
        for breakpoint in Breakpoint::ALL {
            let layout = self.get(breakpoint);
            if layout.num_visible == 0 || layout.num_step == 0 {
                return Err(CarouselError::InvalidLayout { breakpoint });
            }
        }
        Ok(())
    }
}

/// Easing curves for the track animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseInOutQuart,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u * u) / 2.0
                }
            }
        }
    }
}

/// Direction of a recognized swipe gesture. Swiping left reveals the next panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Everything that may move the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Prev,
    Next,
    SelectTab(usize),
    Swipe(SwipeDirection),
    AutoRotate,
}

impl Command {
    /// Manual commands come from the user and permanently stop autorotation.
    pub fn is_manual(self) -> bool {
        !matches!(self, Self::AutoRotate)
    }
}

/// Keys handled on tab-nav controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Space,
    Left,
    Up,
    Right,
    Down,
    Home,
    End,
}

impl Key {
    /// Maps a DOM `keyCode`.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            32 => Self::Space,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            _ => return None,
        })
    }
}

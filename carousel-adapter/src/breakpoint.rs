use carousel::{Breakpoint, BreakpointThresholds};

/// Turns a stream of viewport widths into breakpoint changes.
///
/// Resize events fire far more often than the tier changes; only the latter are worth
/// forwarding to [`carousel::Carousel::on_breakpoint_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointWatcher {
    thresholds: BreakpointThresholds,
    current: Breakpoint,
}

impl BreakpointWatcher {
    pub fn new(thresholds: BreakpointThresholds, initial_width: u32) -> Self {
        Self {
            thresholds,
            current: thresholds.breakpoint_for_width(initial_width),
        }
    }

    pub fn thresholds(&self) -> BreakpointThresholds {
        self.thresholds
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    /// Records a new viewport width. Returns the new breakpoint when the tier changed.
    pub fn observe(&mut self, width: u32) -> Option<Breakpoint> {
        let breakpoint = self.thresholds.breakpoint_for_width(width);
        if breakpoint == self.current {
            return None;
        }
        atrace!(width, from = %self.current, to = %breakpoint, "breakpoint crossed");
        self.current = breakpoint;
        Some(breakpoint)
    }
}

impl Default for BreakpointWatcher {
    fn default() -> Self {
        Self::new(BreakpointThresholds::default(), 0)
    }
}

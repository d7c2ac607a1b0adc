/// Interval-driven source of automatic advances.
///
/// The timer is driven by the host clock: it arms on the first [`AutoRotation::poll`] and fires
/// once per elapsed interval. After `max_rotations * panel_count` ticks, or on the first manual
/// command, it cancels itself for good.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoRotation {
    enabled: bool,
    interval_ms: u64,
    remaining: usize,
    next_due_ms: Option<u64>,
}

impl AutoRotation {
    pub fn new(enabled: bool, interval_ms: u64, max_rotations: usize, panel_count: usize) -> Self {
        let remaining = max_rotations.saturating_mul(panel_count);
        Self {
            enabled: enabled && remaining > 0,
            interval_ms: interval_ms.max(1),
            remaining,
            next_due_ms: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ticks left before the timer cancels itself.
    pub fn remaining(&self) -> usize {
        if self.enabled { self.remaining } else { 0 }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        if self.enabled { self.next_due_ms } else { None }
    }

    /// Cancels the timer permanently. Returns `true` if it was running.
    pub fn cancel(&mut self) -> bool {
        let was_enabled = self.enabled;
        self.enabled = false;
        self.next_due_ms = None;
        was_enabled
    }

    /// Returns `true` when a tick is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(due) = self.next_due_ms else {
            self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
            return false;
        };
        if now_ms < due {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.cancel();
        } else {
            self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
        }
        true
    }
}

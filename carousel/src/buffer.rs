use core::ops::Range;

/// The index space of the physical track.
///
/// A looping buffer lays out three copies of the authored panels (clone, original, clone) and
/// keeps the settled position in the middle copy, so moving one step in either direction always
/// has a panel to slide to. A finite buffer is just the authored panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopBuffer {
    len: usize,
    looping: bool,
}

/// Result of moving the buffer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Where the move starts from. Differs from the original position when `rehomed` is set.
    pub previous: usize,
    pub current: usize,
    /// The move left the middle copy and both ends were shifted by one copy length. The track
    /// must jump to `previous` without animation before animating to `current`.
    pub rehomed: bool,
}

impl LoopBuffer {
    pub fn new(len: usize, looping: bool) -> Self {
        Self {
            len,
            looping: looping && len > 0,
        }
    }

    /// Number of authored panels.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn copies(&self) -> usize {
        if self.looping { 3 } else { 1 }
    }

    /// Number of physical panels, clones included.
    pub fn track_len(&self) -> usize {
        self.len * self.copies()
    }

    pub fn clone_count(&self) -> usize {
        self.track_len() - self.len
    }

    /// Buffer index of a real index in its settled (middle) copy.
    pub fn home(&self, real_index: usize) -> usize {
        debug_assert!(real_index < self.len, "real index out of range");
        if self.looping {
            real_index + self.len
        } else {
            real_index
        }
    }

    pub fn real_index(&self, buffer_index: usize) -> usize {
        debug_assert!(buffer_index < self.track_len(), "buffer index out of range");
        if self.len == 0 {
            return 0;
        }
        buffer_index % self.len
    }

    /// Whether `buffer_index` is a valid settled position.
    pub fn is_settled(&self, buffer_index: usize) -> bool {
        if self.looping {
            (self.len..self.len * 2).contains(&buffer_index)
        } else {
            buffer_index < self.len
        }
    }

    /// Buffer indexes of every physical copy of `real_index`, ascending.
    pub fn twins(&self, real_index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.copies()).map(move |copy| copy * self.len + real_index)
    }

    /// Moves `from` by `delta` positions in a looping buffer, re-homing into the middle copy when
    /// the move would settle in one of the clone copies.
    ///
    /// `from` must be settled and `|delta|` must not exceed the panel count.
    pub fn advance(&self, from: usize, delta: isize) -> Advance {
        debug_assert!(self.looping, "advance requires a looping buffer");
        debug_assert!(self.is_settled(from), "advance from an unsettled position");
        let n = self.len as isize;
        debug_assert!(delta.abs() <= n, "advance by more than one copy");

        let mut previous = from as isize;
        let mut current = previous + delta;
        let mut rehomed = false;
        if current < n {
            previous += n;
            current += n;
            rehomed = true;
        } else if current >= n * 2 {
            previous -= n;
            current -= n;
            rehomed = true;
        }

        debug_assert!(
            (0..n * 3).contains(&previous) && (n..n * 2).contains(&current),
            "advance left the buffer (previous={previous}, current={current})"
        );
        Advance {
            previous: previous.max(0) as usize,
            current: current.max(0) as usize,
            rehomed,
        }
    }

    /// The panels to mark active for a window of `num_visible` panels starting at `current`.
    pub fn active_set(&self, current: usize, num_visible: usize) -> ActiveSet {
        let count = num_visible.min(self.len);
        let start = if self.looping {
            current
        } else {
            current.min(self.len - count)
        };
        ActiveSet {
            window: start..start + count,
            len: self.len,
            copies: self.copies(),
        }
    }
}

/// The visible window plus its buffer twins.
///
/// At any instant up to three physical copies of the same panel exist on a looping track, so
/// every copy of a panel in the window is treated as active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSet {
    window: Range<usize>,
    len: usize,
    copies: usize,
}

impl ActiveSet {
    /// Buffer indexes of the visible window itself.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Number of distinct panels in the window.
    pub fn count(&self) -> usize {
        self.window.len()
    }

    pub fn contains_real(&self, real_index: usize) -> bool {
        if self.len == 0 || real_index >= self.len {
            return false;
        }
        let first = self.window.start % self.len;
        (real_index + self.len - first) % self.len < self.count()
    }

    pub fn contains(&self, buffer_index: usize) -> bool {
        if self.len == 0 || buffer_index >= self.len * self.copies {
            return false;
        }
        self.contains_real(buffer_index % self.len)
    }

    /// Real indexes of the window, in window order.
    pub fn for_each_real(&self, mut f: impl FnMut(usize)) {
        for buffer_index in self.window.clone() {
            f(buffer_index % self.len);
        }
    }

    /// Every active physical panel (window and twins), ascending.
    pub fn for_each_buffer_index(&self, mut f: impl FnMut(usize)) {
        for buffer_index in 0..self.len * self.copies {
            if self.contains(buffer_index) {
                f(buffer_index);
            }
        }
    }
}

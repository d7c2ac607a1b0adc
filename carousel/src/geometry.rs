use crate::{Breakpoint, BreakpointLayouts, CarouselError};

const PERCENT: f32 = 100.0;

/// Track geometry for one breakpoint.
///
/// Percentages follow the usual sliding-track layout: the track is `track_width`% of the
/// viewport, each physical panel is `item_width`% of the track, and shifting the track by one
/// index position moves it `scroll_unit`% of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub breakpoint: Breakpoint,
    pub num_visible: usize,
    pub num_step: usize,
    /// The last index the first visible panel may take when the carousel does not loop.
    pub last_index: usize,
    pub item_width: f32,
    pub track_width: f32,
    pub scroll_unit: f32,
}

impl Geometry {
    /// Resolves the geometry for `breakpoint`.
    ///
    /// `track_len` is the number of physical panels on the track (clones included).
    pub fn resolve(
        breakpoint: Breakpoint,
        layouts: &BreakpointLayouts,
        panel_count: usize,
        track_len: usize,
    ) -> Result<Self, CarouselError> {
        if panel_count == 0 {
            return Err(CarouselError::NoPanels);
        }
        let layout = layouts.get(breakpoint);
        if layout.num_visible == 0 || layout.num_step == 0 {
            return Err(CarouselError::InvalidLayout { breakpoint });
        }

        let track_len = track_len.max(panel_count) as f32;
        let num_visible = layout.num_visible;
        Ok(Self {
            breakpoint,
            num_visible,
            num_step: layout.num_step.min(panel_count),
            last_index: panel_count.saturating_sub(num_visible),
            item_width: PERCENT / track_len,
            track_width: track_len * PERCENT / num_visible as f32,
            scroll_unit: PERCENT / num_visible as f32,
        })
    }

    /// Whether there are more panels than fit in the viewport.
    pub fn can_scroll(&self, panel_count: usize) -> bool {
        panel_count > self.num_visible
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index)
    }

    /// Track offset (percent of the viewport, negative to the left) that puts `index` first.
    pub fn offset_for(&self, index: usize) -> f32 {
        -(self.scroll_unit * index as f32)
    }
}

use crate::Breakpoint;

/// A lightweight, serializable snapshot of the transition state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Buffer index of the first visible panel.
    pub current_index: usize,
    /// Where the latest transition started. Reassigned when the next one starts.
    pub previous_index: Option<usize>,
    pub is_animating: bool,
    pub breakpoint: Breakpoint,
}

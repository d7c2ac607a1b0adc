use alloc::string::String;

use crate::Geometry;

/// Reference to a panel handed to the host and to event listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelRef {
    pub real_index: usize,
    pub buffer_index: usize,
    pub id: Option<String>,
}

/// Where the host should move DOM focus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusTarget {
    /// The panel's first focusable content element.
    Panel(PanelRef),
    /// A tab-nav control, by index.
    Tab(usize),
}

/// Lifecycle events, delivered to the instance's `on_event` callback.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    Initialized,
    WillUpdate { active: PanelRef },
    DidUpdate { active: PanelRef },
    /// Emitted after `DidUpdate` when tracking is enabled.
    Tracking { active: PanelRef },
    GeometryChanged { geometry: Geometry },
    UnInitialized,
}

use alloc::string::String;
use alloc::sync::Arc;

use crate::{Breakpoint, BreakpointLayouts, CarouselEvent, Easing, Layout};

/// A callback fired for every lifecycle event of one carousel instance.
pub type EventCallback = Arc<dyn Fn(&CarouselEvent) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// The options are fixed for the lifetime of an instance. Cloning is cheap: the event callback
/// lives in an `Arc`.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Starting real index, clamped to the panel count.
    pub initial_index: usize,
    pub layouts: BreakpointLayouts,

    /// Wrap around at the ends instead of disabling Prev/Next. Looping carousels keep two clone
    /// copies of the panels on the track.
    pub loop_end_to_end: bool,

    /// Activate incoming panels one after another instead of all at once.
    pub stagger_active_items: bool,
    pub stagger_delay_ms: u64,

    pub enable_swipe: bool,

    pub auto_rotate: bool,
    pub auto_rotate_interval_ms: u64,
    /// Autorotation budget, in passes over the whole panel set.
    pub max_auto_rotations: usize,

    pub anim_duration_ms: u64,
    pub anim_easing: Easing,

    pub enable_tracking: bool,

    /// URL fragment (with or without `#`). When it names a panel `id`, that panel becomes the
    /// initial panel and receives focus once the document has loaded.
    pub deep_link: Option<String>,

    pub on_event: Option<EventCallback>,
}

impl CarouselOptions {
    /// Options for a responsive, non-looping carousel showing one panel at every breakpoint.
    pub fn new() -> Self {
        Self {
            initial_index: 0,
            layouts: BreakpointLayouts::default(),
            loop_end_to_end: false,
            stagger_active_items: false,
            stagger_delay_ms: 100,
            enable_swipe: true,
            auto_rotate: false,
            auto_rotate_interval_ms: 8000,
            max_auto_rotations: 5,
            anim_duration_ms: 400,
            anim_easing: Easing::default(),
            enable_tracking: false,
            deep_link: None,
            on_event: None,
        }
    }

    /// Same as [`CarouselOptions::new`].
    pub fn responsive() -> Self {
        Self::new()
    }

    /// Options for an endlessly looping carousel showing one panel at a time. Combined with tab
    /// markup this is a hero carousel.
    pub fn infinite() -> Self {
        Self::new().with_loop_end_to_end(true)
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_layouts(mut self, layouts: BreakpointLayouts) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn with_layout(mut self, breakpoint: Breakpoint, layout: Layout) -> Self {
        self.layouts = self.layouts.with(breakpoint, layout);
        self
    }

    pub fn with_loop_end_to_end(mut self, loop_end_to_end: bool) -> Self {
        self.loop_end_to_end = loop_end_to_end;
        self
    }

    pub fn with_stagger_active_items(mut self, stagger: bool) -> Self {
        self.stagger_active_items = stagger;
        self
    }

    pub fn with_stagger_delay_ms(mut self, delay_ms: u64) -> Self {
        self.stagger_delay_ms = delay_ms;
        self
    }

    pub fn with_enable_swipe(mut self, enable_swipe: bool) -> Self {
        self.enable_swipe = enable_swipe;
        self
    }

    pub fn with_auto_rotate(mut self, interval_ms: u64, max_auto_rotations: usize) -> Self {
        self.auto_rotate = true;
        self.auto_rotate_interval_ms = interval_ms;
        self.max_auto_rotations = max_auto_rotations;
        self
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.anim_duration_ms = duration_ms;
        self.anim_easing = easing;
        self
    }

    pub fn with_enable_tracking(mut self, enable_tracking: bool) -> Self {
        self.enable_tracking = enable_tracking;
        self
    }

    pub fn with_deep_link(mut self, fragment: impl Into<String>) -> Self {
        self.deep_link = Some(fragment.into());
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&CarouselEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("initial_index", &self.initial_index)
            .field("layouts", &self.layouts)
            .field("loop_end_to_end", &self.loop_end_to_end)
            .field("stagger_active_items", &self.stagger_active_items)
            .field("stagger_delay_ms", &self.stagger_delay_ms)
            .field("enable_swipe", &self.enable_swipe)
            .field("auto_rotate", &self.auto_rotate)
            .field("auto_rotate_interval_ms", &self.auto_rotate_interval_ms)
            .field("max_auto_rotations", &self.max_auto_rotations)
            .field("anim_duration_ms", &self.anim_duration_ms)
            .field("anim_easing", &self.anim_easing)
            .field("enable_tracking", &self.enable_tracking)
            .field("deep_link", &self.deep_link)
            .finish_non_exhaustive()
    }
}

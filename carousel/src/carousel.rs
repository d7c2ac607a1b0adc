use alloc::vec::Vec;
use core::mem;

use crate::transition::Phase;
use crate::{
    Accessibility, ActiveSet, AutoRotation, Breakpoint, CarouselError, CarouselEvent,
    CarouselOptions, CarouselState, Command, FocusTarget, Geometry, IgnoreReason, Key, LoopBuffer,
    Markup, Outcome, Panel, PanelRef, Settled, SwipeDirection, Transition,
};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects. The host mirrors [`Carousel::attributes`] and
///   [`Carousel::offset`] onto its document.
/// - Input arrives as [`Command`]s, tab key presses, breakpoint notifications and a monotonic
///   `now_ms` clock passed to [`Carousel::tick`].
/// - Track animation is the host's job: a started [`Transition`] says where to animate from and
///   to, and the host reports completion with [`Carousel::complete_transition`].
///
/// Only one transition is in flight at a time. Commands arriving meanwhile are dropped, not
/// queued. Breakpoint changes are the exception: they update bookkeeping immediately and leave
/// the running animation alone.
///
/// For tween-driven hosts, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    panels: Vec<Panel>,
    buffer: LoopBuffer,
    geometry: Geometry,

    current_index: usize,
    previous_index: Option<usize>,
    // Real index of the highlighted tab. Kept while its panel is in the visible window.
    selected_tab: usize,
    phase: Phase,
    geometry_changed_in_flight: bool,
    offset: f32,

    a11y: Accessibility,
    staggered: Vec<(u64, usize)>, // (due_ms, real index)
    initial_focus: Option<usize>,
    autorotation: AutoRotation,
}

/// What [`Carousel::uninitialize`] left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teardown {
    /// Attribute model with everything the engine added removed; clone panels are gone.
    pub attributes: Accessibility,
    pub detached_clones: usize,
    pub cancelled_autorotation: bool,
}

impl Carousel {
    /// Builds and initializes a carousel.
    ///
    /// Fails without side effects (no events are emitted) if the markup is incomplete or a
    /// layout is unusable.
    pub fn new(
        options: CarouselOptions,
        markup: Markup,
        breakpoint: Breakpoint,
    ) -> Result<Self, CarouselError> {
        markup.validate()?;
        options.layouts.validate()?;

        let panel_count = markup.panels.len();
        let buffer = LoopBuffer::new(panel_count, options.loop_end_to_end);
        let geometry = Geometry::resolve(
            breakpoint,
            &options.layouts,
            panel_count,
            buffer.track_len(),
        )?;

        let deep_linked = options
            .deep_link
            .as_deref()
            .and_then(|fragment| markup.find_fragment(fragment));
        let initial = deep_linked.unwrap_or(options.initial_index.min(panel_count - 1));
        let current_index = if buffer.is_looping() {
            buffer.home(initial)
        } else {
            geometry.clamp_index(initial)
        };

        let autorotation = AutoRotation::new(
            options.auto_rotate,
            options.auto_rotate_interval_ms,
            options.max_auto_rotations,
            panel_count,
        );
        cdebug!(
            panels = panel_count,
            looping = buffer.is_looping(),
            %breakpoint,
            current_index,
            "Carousel::new"
        );

        let mut c = Self {
            a11y: Accessibility::new(&buffer, markup.tabs),
            panels: markup.panels,
            initial_focus: deep_linked.map(|real| buffer.home(real)),
            offset: geometry.offset_for(current_index),
            options,
            buffer,
            geometry,
            current_index,
            previous_index: None,
            selected_tab: initial,
            phase: Phase::Idle,
            geometry_changed_in_flight: false,
            staggered: Vec::new(),
            autorotation,
        };
        c.sync_controls();
        c.activate_window(None);
        c.emit(CarouselEvent::Initialized);
        Ok(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn buffer(&self) -> &LoopBuffer {
        &self.buffer
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.geometry.breakpoint
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Buffer index of the first visible panel.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Real index of the first visible panel.
    pub fn real_index(&self) -> usize {
        self.buffer.real_index(self.current_index)
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.previous_index
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// Idle with every staggered activation applied.
    pub fn is_settled(&self) -> bool {
        !self.is_animating() && self.staggered.is_empty()
    }

    pub fn transition(&self) -> Option<&Transition> {
        match &self.phase {
            Phase::Transitioning(t) => Some(t),
            Phase::Idle => None,
        }
    }

    /// Settled track offset (percent of the viewport). While a transition is in flight this is
    /// where the animation started.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn active_set(&self) -> ActiveSet {
        self.buffer
            .active_set(self.current_index, self.geometry.num_visible)
    }

    pub fn active_panel(&self) -> PanelRef {
        self.panel_ref(self.current_index)
    }

    pub fn attributes(&self) -> &Accessibility {
        &self.a11y
    }

    pub fn autorotation(&self) -> &AutoRotation {
        &self.autorotation
    }

    /// Returns a lightweight snapshot of the transition state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            previous_index: self.previous_index,
            is_animating: self.is_animating(),
            breakpoint: self.geometry.breakpoint,
        }
    }

    pub fn panel_ref(&self, buffer_index: usize) -> PanelRef {
        let real_index = self.buffer.real_index(buffer_index);
        PanelRef {
            real_index,
            buffer_index,
            id: self.panels.get(real_index).and_then(|p| p.id.clone()),
        }
    }

    /// Handles a navigation command.
    ///
    /// Commands are dropped while a transition is in flight. Re-selecting the active tab only
    /// asks the host to focus the panel. A manual command that passes these guards cancels
    /// autorotation for good.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        ctrace!(?command, current_index = self.current_index, "Carousel::dispatch");
        if self.is_animating() {
            return Outcome::Ignored(IgnoreReason::Busy);
        }

        match command {
            Command::SelectTab(tab) => self.select_tab(tab),
            Command::Swipe(_) if !self.options.enable_swipe => {
                Outcome::Ignored(IgnoreReason::SwipeDisabled)
            }
            Command::Prev | Command::Next | Command::Swipe(_) | Command::AutoRotate => {
                self.step(command)
            }
        }
    }

    fn select_tab(&mut self, tab: usize) -> Outcome {
        if tab >= self.a11y.tabs().len() {
            return Outcome::Ignored(IgnoreReason::OutOfRange);
        }
        let target = if self.buffer.is_looping() {
            self.buffer.home(tab)
        } else {
            self.geometry.clamp_index(tab)
        };

        self.cancel_autorotation();
        self.selected_tab = tab;
        // The tab's panel is already on screen: only focus moves.
        if target == self.current_index || !self.geometry.can_scroll(self.panels.len()) {
            self.sync_controls();
            let panel = self.panel_ref(self.buffer.home(tab));
            return Outcome::Focused(FocusTarget::Panel(panel));
        }
        self.begin(Command::SelectTab(tab), self.current_index, target, false)
    }

    fn step(&mut self, command: Command) -> Outcome {
        let forward = matches!(
            command,
            Command::Next | Command::Swipe(SwipeDirection::Left) | Command::AutoRotate
        );
        if command.is_manual() {
            let control = if forward {
                self.a11y.next()
            } else {
                self.a11y.prev()
            };
            if control.disabled {
                return Outcome::Ignored(IgnoreReason::Disabled);
            }
        }
        if !self.geometry.can_scroll(self.panels.len()) {
            return Outcome::Ignored(IgnoreReason::Unchanged);
        }

        let step = self.geometry.num_step;
        let (previous, target, rehomed) = if self.buffer.is_looping() {
            let delta = if forward {
                step as isize
            } else {
                -(step as isize)
            };
            let advance = self.buffer.advance(self.current_index, delta);
            (advance.previous, advance.current, advance.rehomed)
        } else {
            let current = self.current_index;
            let last = self.geometry.last_index;
            let target = match command {
                // Autorotation wraps even when the controls do not.
                Command::AutoRotate if current >= last => 0,
                _ if forward => current.saturating_add(step).min(last),
                _ => current.saturating_sub(step),
            };
            (current, target, false)
        };
        if target == previous && !rehomed {
            return Outcome::Ignored(IgnoreReason::Unchanged);
        }

        if command.is_manual() {
            self.cancel_autorotation();
        }
        self.selected_tab = self.buffer.real_index(target);
        self.begin(command, previous, target, rehomed)
    }

    fn begin(
        &mut self,
        command: Command,
        previous: usize,
        target: usize,
        rehomed: bool,
    ) -> Outcome {
        debug_assert!(!self.is_animating(), "transition started while another is in flight");
        debug_assert!(
            self.buffer.is_settled(target),
            "transition target {target} outside the settled range"
        );

        self.staggered.clear();
        self.previous_index = Some(previous);
        self.current_index = target;

        let from = self.geometry.offset_for(previous);
        let jump_to = rehomed.then_some(from);
        self.offset = from;

        // Outgoing panels leave the tab order before the track moves.
        self.a11y.deactivate_panels();
        self.sync_controls();

        let active = self.panel_ref(target);
        let transition = Transition {
            command,
            previous_index: previous,
            target_index: target,
            jump_to,
            from,
            to: self.geometry.offset_for(target),
            duration_ms: self.options.anim_duration_ms,
            easing: self.options.anim_easing,
            active: active.clone(),
            user_initiated: command.is_manual(),
        };
        ctrace!(previous, target, rehomed, "transition started");
        self.phase = Phase::Transitioning(transition.clone());
        self.emit(CarouselEvent::WillUpdate { active });
        Outcome::Started(transition)
    }

    /// Settles the in-flight transition. Call this from the animation-complete callback.
    ///
    /// Returns `None` (and debug-asserts) when no transition is in flight.
    pub fn complete_transition(&mut self, now_ms: u64) -> Option<Settled> {
        let phase = mem::replace(&mut self.phase, Phase::Idle);
        debug_assert!(
            matches!(phase, Phase::Transitioning(_)),
            "complete_transition without a transition in flight"
        );
        let Phase::Transitioning(transition) = phase else {
            cwarn!("complete_transition without a transition in flight");
            return None;
        };

        let target = self.geometry.offset_for(self.current_index);
        let correction = mem::take(&mut self.geometry_changed_in_flight).then_some(target);
        self.offset = target;

        self.activate_window(Some(now_ms));
        self.sync_controls();

        let active = self.panel_ref(self.current_index);
        let focus = transition.user_initiated.then(|| match transition.command {
            Command::SelectTab(tab) => FocusTarget::Panel(self.panel_ref(self.buffer.home(tab))),
            _ => FocusTarget::Panel(active.clone()),
        });
        ctrace!(current_index = self.current_index, "transition settled");

        self.emit(CarouselEvent::DidUpdate {
            active: active.clone(),
        });
        if self.options.enable_tracking {
            self.emit(CarouselEvent::Tracking {
                active: active.clone(),
            });
        }
        Some(Settled {
            active,
            focus,
            correction,
        })
    }

    /// Advances the host clock: applies due staggered activations and fires autorotation.
    ///
    /// Returns the transition an autorotation tick started, if any. A tick that finds a
    /// transition in flight is dropped but still counts against the autorotation budget.
    pub fn tick(&mut self, now_ms: u64) -> Option<Transition> {
        if !self.staggered.is_empty() {
            let a11y = &mut self.a11y;
            let buffer = &self.buffer;
            self.staggered.retain(|&(due_ms, real_index)| {
                if due_ms > now_ms {
                    return true;
                }
                a11y.activate_panel(buffer, real_index);
                false
            });
        }

        if !self.autorotation.poll(now_ms) {
            return None;
        }
        ctrace!(
            remaining = self.autorotation.remaining(),
            now_ms,
            "autorotation tick"
        );
        match self.dispatch(Command::AutoRotate) {
            Outcome::Started(transition) => Some(transition),
            _ => None,
        }
    }

    /// Handles a key press on tab `tab`.
    ///
    /// Space selects the tab. Arrow keys, Home and End only move focus between tabs.
    pub fn on_tab_key(&mut self, tab: usize, key: Key) -> Outcome {
        let count = self.a11y.tabs().len();
        if tab >= count {
            return Outcome::Ignored(IgnoreReason::OutOfRange);
        }
        let focus = match key {
            Key::Space => return self.dispatch(Command::SelectTab(tab)),
            Key::Left | Key::Up => (tab + count - 1) % count,
            Key::Right | Key::Down => (tab + 1) % count,
            Key::Home => 0,
            Key::End => count - 1,
        };
        Outcome::Focused(FocusTarget::Tab(focus))
    }

    /// Reacts to a new breakpoint.
    ///
    /// Geometry, the index clamp and the Prev/Next state update immediately, even mid-flight.
    /// When idle the track jumps (no animation) to the returned offset; otherwise the running
    /// animation finishes and [`Settled::correction`] carries the jump.
    pub fn on_breakpoint_change(&mut self, breakpoint: Breakpoint) -> Option<f32> {
        if breakpoint == self.geometry.breakpoint {
            return None;
        }
        let Ok(geometry) = Geometry::resolve(
            breakpoint,
            &self.options.layouts,
            self.panels.len(),
            self.buffer.track_len(),
        ) else {
            cwarn!(%breakpoint, "no usable layout for breakpoint");
            return None;
        };
        cdebug!(
            from = %self.geometry.breakpoint,
            to = %breakpoint,
            num_visible = geometry.num_visible,
            last_index = geometry.last_index,
            "breakpoint change"
        );

        self.geometry = geometry;
        if !self.buffer.is_looping() {
            self.current_index = geometry.clamp_index(self.current_index);
        }
        self.sync_controls();

        let jump = if self.is_animating() {
            self.geometry_changed_in_flight = true;
            None
        } else {
            self.offset = geometry.offset_for(self.current_index);
            self.staggered.clear();
            self.a11y.deactivate_panels();
            self.activate_window(None);
            Some(self.offset)
        };
        self.emit(CarouselEvent::GeometryChanged { geometry });
        jump
    }

    /// Same as [`Carousel::on_breakpoint_change`], for hosts that receive breakpoint names.
    pub fn on_breakpoint_name(&mut self, name: &str) -> Result<Option<f32>, CarouselError> {
        let breakpoint = name.parse::<Breakpoint>()?;
        Ok(self.on_breakpoint_change(breakpoint))
    }

    /// Call once the document has finished loading. Returns the deferred deep-link focus, once.
    pub fn on_document_loaded(&mut self) -> Option<FocusTarget> {
        let buffer_index = self.initial_focus.take()?;
        Some(FocusTarget::Panel(self.panel_ref(buffer_index)))
    }

    /// Tears the carousel down: cancels autorotation, strips every attribute the engine added
    /// and detaches the clone panels.
    pub fn uninitialize(mut self) -> Teardown {
        let cancelled_autorotation = self.autorotation.cancel();
        let detached_clones = self.buffer.clone_count();
        self.a11y.strip(self.panels.len());
        cdebug!(detached_clones, cancelled_autorotation, "Carousel::uninitialize");
        self.emit(CarouselEvent::UnInitialized);
        Teardown {
            attributes: self.a11y,
            detached_clones,
            cancelled_autorotation,
        }
    }

    fn cancel_autorotation(&mut self) {
        if self.autorotation.cancel() {
            cdebug!("autorotation cancelled by manual navigation");
        }
    }

    fn sync_controls(&mut self) {
        let (prev_disabled, next_disabled) = if !self.geometry.can_scroll(self.panels.len()) {
            (true, true)
        } else if self.buffer.is_looping() {
            (false, false)
        } else {
            (
                self.current_index == 0,
                self.current_index >= self.geometry.last_index,
            )
        };
        self.a11y.set_nav_disabled(prev_disabled, next_disabled);
        if !self.a11y.tabs().is_empty() {
            if !self.active_set().contains_real(self.selected_tab) {
                self.selected_tab = self.real_index();
            }
            self.a11y.select_tab(self.selected_tab);
        }
    }

    /// Activates the visible window. With `now_ms` set and staggering enabled, panels after the
    /// first are queued for [`Carousel::tick`].
    fn activate_window(&mut self, now_ms: Option<u64>) {
        let set = self.active_set();
        let stagger_from = now_ms.filter(|_| self.options.stagger_active_items);
        let delay_ms = self.options.stagger_delay_ms;
        let a11y = &mut self.a11y;
        let buffer = &self.buffer;
        let staggered = &mut self.staggered;

        let mut order = 0u64;
        set.for_each_real(|real_index| {
            match stagger_from {
                Some(now_ms) if order > 0 => staggered.push((
                    now_ms.saturating_add(delay_ms.saturating_mul(order)),
                    real_index,
                )),
                _ => a11y.activate_panel(buffer, real_index),
            }
            order += 1;
        });
    }

    fn emit(&self, event: CarouselEvent) {
        ctrace!(?event, "emit");
        if let Some(cb) = &self.options.on_event {
            cb(&event);
        }
    }
}

use carousel::{
    Breakpoint, Carousel, CarouselError, CarouselOptions, Command, FocusTarget, Key, Markup,
    Outcome, Settled, Teardown, Transition,
};

use crate::Tween;

/// What one [`Controller::tick`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Track offset to render (percent of the viewport).
    pub position: f32,
    /// Set on the frame the running transition completed.
    pub settled: Option<Settled>,
    /// Set when autorotation started a new transition on this frame.
    pub started: Option<Transition>,
}

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and animates its track
/// with a [`Tween`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `dispatch` / `on_tab_key` when the user interacts
/// - `on_breakpoint_change` when the viewport crosses a tier (see [`crate::BreakpointWatcher`])
/// - `tick(now_ms)` each frame/timer tick
///
/// and render [`Frame::position`] plus [`Carousel::attributes`].
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    tween: Option<Tween>,
    position: f32,
}

impl Controller {
    pub fn new(
        options: CarouselOptions,
        markup: Markup,
        breakpoint: Breakpoint,
    ) -> Result<Self, CarouselError> {
        Ok(Self::from_carousel(Carousel::new(options, markup, breakpoint)?, 0))
    }

    /// Wraps a carousel. A transition already in flight is animated from `now_ms` and settles
    /// through [`Controller::tick`] like any other.
    pub fn from_carousel(c: Carousel, now_ms: u64) -> Self {
        let mut controller = Self {
            position: c.offset(),
            c,
            tween: None,
        };
        if let Some(transition) = controller.c.transition().cloned() {
            controller.start(&transition, now_ms);
        }
        controller
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn into_carousel(self) -> Carousel {
        self.c
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Forwards a command. A started transition begins animating at `now_ms`.
    pub fn dispatch(&mut self, command: Command, now_ms: u64) -> Outcome {
        let outcome = self.c.dispatch(command);
        if let Outcome::Started(transition) = &outcome {
            self.start(transition, now_ms);
        }
        outcome
    }

    pub fn on_tab_key(&mut self, tab: usize, key: Key, now_ms: u64) -> Outcome {
        let outcome = self.c.on_tab_key(tab, key);
        if let Outcome::Started(transition) = &outcome {
            self.start(transition, now_ms);
        }
        outcome
    }

    /// Forwards a breakpoint change. When idle the track jumps immediately; otherwise the
    /// correction is applied when the running tween completes.
    pub fn on_breakpoint_change(&mut self, breakpoint: Breakpoint) -> Option<f32> {
        let jump = self.c.on_breakpoint_change(breakpoint)?;
        self.position = jump;
        Some(jump)
    }

    pub fn on_document_loaded(&mut self) -> Option<FocusTarget> {
        self.c.on_document_loaded()
    }

    /// Advances the controller.
    ///
    /// Samples the running tween and settles the transition once it is done, then lets the
    /// carousel apply staggered activations and autorotation.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        let mut settled = None;
        if let Some(tween) = self.tween {
            self.position = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                settled = self.c.complete_transition(now_ms);
                if let Some(correction) = settled.as_ref().and_then(|s| s.correction) {
                    self.position = correction;
                }
            }
        }

        let started = self.c.tick(now_ms);
        if let Some(transition) = &started {
            self.start(transition, now_ms);
        }

        Frame {
            position: self.position,
            settled,
            started,
        }
    }

    /// Stops any animation and tears the carousel down.
    pub fn uninitialize(self) -> Teardown {
        self.c.uninitialize()
    }

    fn start(&mut self, transition: &Transition, now_ms: u64) {
        // Re-homed moves first snap to the equivalent position in the middle copy.
        if let Some(jump) = transition.jump_to {
            self.position = jump;
        }
        adebug!(
            from = transition.from,
            to = transition.to,
            now_ms,
            "tween started"
        );
        self.tween = Some(Tween::for_transition(transition, now_ms));
    }
}

use crate::*;

use carousel::{
    Breakpoint, BreakpointLayouts, BreakpointThresholds, CarouselOptions, Command, FocusTarget,
    IgnoreReason, Key, Layout, Markup, Outcome,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn tween_eases_between_offsets() {
    let t = Tween::new(-100.0, -200.0, 1000, 400, Easing::SmoothStep);
    assert!(approx(t.sample(0), -100.0));
    assert!(approx(t.sample(1000), -100.0));
    assert!(approx(t.sample(1200), -150.0));
    assert!(approx(t.sample(1400), -200.0));
    assert!(approx(t.sample(9000), -200.0));
    assert!(!t.is_done(1399));
    assert!(t.is_done(1400));

    let mut last = 0.0f32;
    for now_ms in (1000..=1400).step_by(25) {
        let v = t.sample(now_ms);
        assert!(v <= last);
        last = v;
    }

    let instant = Tween::new(0.0, 10.0, 0, 0, Easing::Linear);
    assert_eq!(instant.duration_ms, 1);
    assert!(approx(instant.sample(1), 10.0));
}

#[test]
fn controller_tween_drives_the_track_and_settles() {
    let mut c = Controller::new(
        CarouselOptions::infinite().with_animation(100, Easing::Linear),
        Markup::with_panel_count(5),
        Breakpoint::Mobile,
    )
    .unwrap();
    assert!(approx(c.position(), -500.0));

    // Wrap backwards: the track snaps to the last clone copy, then slides right.
    let outcome = c.dispatch(Command::Prev, 0);
    assert!(outcome.is_started());
    assert!(approx(c.position(), -1000.0));
    assert!(c.is_animating());

    let mut last = c.position();
    let mut settled = None;
    for now_ms in [0u64, 10, 25, 50, 75, 99, 100, 120] {
        let frame = c.tick(now_ms);
        assert!(frame.position >= last);
        last = frame.position;
        if frame.settled.is_some() {
            settled = frame.settled;
        }
    }
    let settled = settled.unwrap();
    assert_eq!(settled.active.real_index, 4);
    assert_eq!(settled.focus, Some(FocusTarget::Panel(settled.active.clone())));
    assert!(!c.is_animating());
    assert!(!c.carousel().is_animating());
    assert!(approx(c.position(), -900.0));
    assert!(approx(c.position(), c.carousel().offset()));
}

#[test]
fn controller_drops_commands_while_tweening() {
    let mut c = Controller::new(
        CarouselOptions::infinite(),
        Markup::with_panel_count(3).with_tab_nav(),
        Breakpoint::Mobile,
    )
    .unwrap();
    assert!(c.dispatch(Command::Next, 0).is_started());
    assert_eq!(
        c.dispatch(Command::Next, 10),
        Outcome::Ignored(IgnoreReason::Busy)
    );
    assert_eq!(
        c.on_tab_key(0, Key::Space, 10),
        Outcome::Ignored(IgnoreReason::Busy)
    );
    assert!(c.tick(400).settled.is_some());
    assert!(c.on_tab_key(0, Key::Space, 500).is_started());
}

#[test]
fn controller_runs_autorotation_from_ticks() {
    let mut c = Controller::new(
        CarouselOptions::infinite()
            .with_auto_rotate(1000, 1)
            .with_animation(200, Easing::EaseInOutQuart),
        Markup::with_panel_count(3),
        Breakpoint::Tablet,
    )
    .unwrap();

    let mut started = 0;
    let mut settled = 0;
    for now_ms in (0..10_000u64).step_by(16) {
        let frame = c.tick(now_ms);
        if frame.started.is_some() {
            started += 1;
        }
        if let Some(s) = frame.settled {
            assert_eq!(s.focus, None);
            settled += 1;
        }
    }
    assert_eq!(started, 3);
    assert_eq!(settled, 3);
    assert_eq!(c.carousel().real_index(), 0);
    assert!(!c.carousel().autorotation().is_enabled());
}

#[test]
fn controller_applies_breakpoint_corrections() {
    let layouts = BreakpointLayouts {
        mobile: Layout::new(1, 1),
        tablet: Layout::new(2, 1),
        desktop: Layout::new(3, 1),
    };
    let mut c = Controller::new(
        CarouselOptions::new()
            .with_layouts(layouts)
            .with_initial_index(3),
        Markup::with_panel_count(5),
        Breakpoint::Mobile,
    )
    .unwrap();

    // Idle: immediate jump.
    let jump = c.on_breakpoint_change(Breakpoint::Tablet).unwrap();
    assert!(approx(jump, -150.0));
    assert!(approx(c.position(), -150.0));

    // In flight: corrected when the tween completes.
    c.on_breakpoint_change(Breakpoint::Mobile);
    assert!(c.dispatch(Command::Next, 0).is_started());
    assert_eq!(c.on_breakpoint_change(Breakpoint::Desktop), None);
    let frame = c.tick(1_000);
    let settled = frame.settled.unwrap();
    assert!(approx(settled.correction.unwrap(), -200.0 / 3.0));
    assert!(approx(frame.position, -200.0 / 3.0));
    assert_eq!(c.carousel().current_index(), 2);
}

#[test]
fn controller_adopts_a_transition_already_in_flight() {
    let options = CarouselOptions::new()
        .with_layout(Breakpoint::Desktop, Layout::new(3, 3))
        .with_stagger_active_items(true);
    let markup = Markup::with_panel_count(6);
    let mut raw = carousel::Carousel::new(options, markup, Breakpoint::Desktop).unwrap();
    let t = raw.dispatch(Command::Next).transition().unwrap().clone();

    let mut c = Controller::from_carousel(raw, 100);
    assert!(c.is_animating());
    assert!(c.carousel().is_animating());
    assert!(approx(c.position(), t.from));

    assert!(c.tick(300).settled.is_none());
    let frame = c.tick(500);
    assert!(frame.settled.is_some());
    assert!(approx(frame.position, t.to));

    // Staggered activations are scheduled from the settle time, not from zero.
    assert!(!c.carousel().is_settled());
    c.tick(599);
    assert!(!c.carousel().is_settled());
    c.tick(700);
    assert!(c.carousel().is_settled());
    assert!(c.carousel().attributes().mirrors(&c.carousel().active_set()));
}

#[test]
fn breakpoint_watcher_reports_tier_changes_only() {
    let mut w = BreakpointWatcher::new(BreakpointThresholds::default(), 375);
    assert_eq!(w.current(), Breakpoint::Mobile);
    assert_eq!(w.observe(500), None);
    assert_eq!(w.observe(800), Some(Breakpoint::Tablet));
    assert_eq!(w.observe(1000), None);
    assert_eq!(w.observe(1440), Some(Breakpoint::Desktop));
    assert_eq!(w.observe(320), Some(Breakpoint::Mobile));
    assert_eq!(w.current(), Breakpoint::Mobile);
}

#[test]
fn uninitialize_through_the_controller() {
    let mut c = Controller::new(
        CarouselOptions::infinite().with_deep_link("#b"),
        Markup::new([carousel::Panel::with_id("a"), carousel::Panel::with_id("b")]),
        Breakpoint::Desktop,
    )
    .unwrap();
    assert!(matches!(
        c.on_document_loaded(),
        Some(FocusTarget::Panel(p)) if p.real_index == 1
    ));
    c.dispatch(Command::Next, 0);
    let teardown = c.uninitialize();
    assert_eq!(teardown.detached_clones, 4);
    assert_eq!(teardown.attributes.panels().len(), 2);
}

use carousel::{BreakpointLayouts, CarouselOptions, Command, Layout, Markup};
use carousel_adapter::{BreakpointWatcher, Controller, Easing};

fn main() -> Result<(), carousel::CarouselError> {
    // Example: controller driving tween-animated transitions without holding any UI objects.
    //
    // An adapter would:
    // - feed viewport widths to the watcher and forward tier changes
    // - dispatch commands from clicks, swipes and keys
    // - call tick(now_ms) in a frame loop and apply the returned position to the track
    let mut watcher = BreakpointWatcher::new(Default::default(), 1280);
    let layouts = BreakpointLayouts {
        mobile: Layout::new(1, 1),
        tablet: Layout::new(2, 1),
        desktop: Layout::new(3, 1),
    };
    let options = CarouselOptions::infinite()
        .with_layouts(layouts)
        .with_animation(240, Easing::EaseInOutCubic);
    let mut c = Controller::new(options, Markup::with_panel_count(5), watcher.current())?;

    let outcome = c.dispatch(Command::Prev, 0);
    println!("prev: started={} position={:.2}", outcome.is_started(), c.position());

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let frame = c.tick(now_ms);
        if now_ms.is_multiple_of(80) {
            println!("t={now_ms} position={:.2}", frame.position);
        }
        if let Some(settled) = frame.settled {
            println!("settled: {settled:?}");
            break;
        }
    }

    for width in [1100, 900, 600] {
        if let Some(breakpoint) = watcher.observe(width) {
            let jump = c.on_breakpoint_change(breakpoint);
            println!("width={width} breakpoint={breakpoint} jump={jump:?}");
        }
    }
    Ok(())
}

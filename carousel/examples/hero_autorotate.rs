// Example: an infinite hero carousel with tab navigation and autorotation, driven by a fake clock.
//
// A host would:
// - call tick(now_ms) from a timer
// - animate the track for every started transition (jumping to `jump_to` first, if set)
// - call complete_transition when the animation ends
use carousel::{Breakpoint, Carousel, CarouselOptions, Key, Markup};

fn main() -> Result<(), carousel::CarouselError> {
    let options = CarouselOptions::infinite().with_auto_rotate(3_000, 1);
    let markup = Markup::with_panel_count(4).with_tab_nav();
    let mut c = Carousel::new(options, markup, Breakpoint::Tablet)?;

    let mut settle_at = None;
    let mut now_ms = 0u64;
    while c.autorotation().is_enabled() || c.is_animating() {
        if settle_at.is_some_and(|at| now_ms >= at) {
            settle_at = None;
            if let Some(settled) = c.complete_transition(now_ms) {
                println!(
                    "t={now_ms} settled on panel {} (tab {:?})",
                    settled.active.real_index,
                    c.attributes().selected_tab()
                );
            }
        }
        if let Some(t) = c.tick(now_ms) {
            println!(
                "t={now_ms} rotate {} -> {} jump_to={:?}",
                t.previous_index, t.target_index, t.jump_to
            );
            settle_at = Some(now_ms + t.duration_ms);
        }
        now_ms += 100;
    }

    // Keyboard on the tab list: arrows move focus, Space selects.
    println!("Right on tab 3: {:?}", c.on_tab_key(3, Key::Right));
    println!("Space on tab 2: {:?}", c.on_tab_key(2, Key::Space).is_started());
    Ok(())
}

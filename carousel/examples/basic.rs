// Example: a responsive carousel driven by hand, without any animation.
use carousel::{
    Breakpoint, BreakpointLayouts, Carousel, CarouselOptions, Command, Layout, Markup, Outcome,
    Panel,
};

fn print_panels(c: &Carousel) {
    let exposed: Vec<_> = c
        .attributes()
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_exposed())
        .map(|(i, _)| i)
        .collect();
    println!(
        "current={} offset={:.2}% exposed={:?} prev_disabled={} next_disabled={}",
        c.current_index(),
        c.offset(),
        exposed,
        c.attributes().prev().disabled,
        c.attributes().next().disabled,
    );
}

fn main() -> Result<(), carousel::CarouselError> {
    let layouts = BreakpointLayouts {
        mobile: Layout::new(1, 1),
        tablet: Layout::new(2, 2),
        desktop: Layout::new(3, 1),
    };
    let options = CarouselOptions::responsive()
        .with_layouts(layouts)
        .with_on_event(Some(|e: &carousel::CarouselEvent| println!("event: {e:?}")));
    let markup = Markup::new((0..6).map(|i| Panel::with_id(format!("panel-{i}"))));

    let mut c = Carousel::new(options, markup, Breakpoint::Desktop)?;
    print_panels(&c);

    for command in [Command::Next, Command::Next, Command::Prev] {
        match c.dispatch(command) {
            Outcome::Started(t) => {
                println!("{command:?}: animate {:.2}% -> {:.2}%", t.from, t.to);
                c.complete_transition(0);
            }
            other => println!("{command:?}: {other:?}"),
        }
        print_panels(&c);
    }

    if let Some(jump) = c.on_breakpoint_change(Breakpoint::Mobile) {
        println!("resized to mobile: jump to {jump:.2}%");
    }
    print_panels(&c);

    let teardown = c.uninitialize();
    println!("teardown: {teardown:?}");
    Ok(())
}

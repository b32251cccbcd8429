use std::fs::File;
use std::time::{Duration, Instant};

use scroll_slider::event::translate;
use scroll_slider::{
    layout_slider, render_slider, Button, Container, Elements, Event, Key, Rect, ScrollSlider,
    SliderConfig, SliderError, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), SliderError> {
    // Set up file logging
    let log_file = File::create("carousel.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = SliderConfig::default();
    let mut elements = Elements::new()
        .container(
            Container::new(&config.container_id)
                .slides((1..=12).map(|n| format!("Entry {n}")))
                .slide_width(14)
                .gap(2),
        )
        .button(Button::new(&config.left_id, '◀'))
        .button(Button::new(&config.right_id, '▶'));

    let mut slider = ScrollSlider::from_registry(&mut elements, config)?;
    let mut term = Terminal::new()?;

    let (width, height) = term.size();
    let mut layout = layout_slider(Rect::from_size(width, height), slider.config());
    slider.set_client_width(layout.client_width());
    slider.handle(&Event::Load);

    loop {
        term.render(|buf| render_slider(&slider, &layout, buf))?;

        let timeout = slider.container().is_animating().then_some(FRAME);
        for raw in term.poll(timeout)? {
            let Some(event) = translate(&raw, &layout) else {
                continue;
            };

            match &event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Resize { width, height } => {
                    layout = layout_slider(Rect::from_size(*width, *height), slider.config());
                    slider.container_mut().set_client_width(layout.client_width());
                }
                _ => {}
            }

            slider.handle(&event);
        }

        slider.tick(Instant::now());
    }
}

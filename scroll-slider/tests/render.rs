use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use scroll_slider::event::translate;
use scroll_slider::{
    hit_test, layout_slider, render_slider, Buffer, Button, Container, Elements, Event, Key,
    MouseButton, Rect, Rgb, ScrollSlider, SliderConfig, SliderLayout, Weight,
};

fn slider_with(slides: &[&str], slide_width: u16, gap: u16, area: Rect) -> (ScrollSlider<Container, Button>, SliderLayout) {
    let mut elements = Elements::new()
        .container(
            Container::new("scrollContainer")
                .slides(slides.iter().copied())
                .slide_width(slide_width)
                .gap(gap),
        )
        .button(Button::new("leftButton", '<'))
        .button(Button::new("rightButton", '>'));
    let mut slider = ScrollSlider::from_registry(&mut elements, SliderConfig::default()).unwrap();
    let layout = layout_slider(area, slider.config());
    slider.set_client_width(layout.client_width());
    (slider, layout)
}

fn render(slider: &ScrollSlider<Container, Button>, layout: &SliderLayout, area: Rect) -> Buffer {
    let mut buf = Buffer::new(area.width, area.height);
    render_slider(slider, layout, &mut buf);
    buf
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout_reserves_button_gutters() {
    let layout = layout_slider(Rect::new(2, 1, 20, 3), &SliderConfig::default());

    assert_eq!(layout.get("leftButton"), Some(Rect::new(2, 1, 3, 3)));
    assert_eq!(layout.get("scrollContainer"), Some(Rect::new(5, 1, 14, 3)));
    assert_eq!(layout.get("rightButton"), Some(Rect::new(19, 1, 3, 3)));
    assert_eq!(layout.client_width(), 14);
    assert_eq!(layout.get("missing"), None);
}

#[test]
fn test_layout_narrow_area() {
    let layout = layout_slider(Rect::from_size(4, 1), &SliderConfig::default());
    assert_eq!(layout.get("leftButton"), Some(Rect::new(0, 0, 2, 1)));
    assert_eq!(layout.client_width(), 0);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_regions() {
    let layout = layout_slider(Rect::from_size(20, 3), &SliderConfig::default());

    assert_eq!(hit_test(&layout, 1, 1), Some("leftButton".to_string()));
    assert_eq!(hit_test(&layout, 10, 0), Some("scrollContainer".to_string()));
    assert_eq!(hit_test(&layout, 19, 2), Some("rightButton".to_string()));
    assert_eq!(hit_test(&layout, 25, 1), None);
}

#[test]
fn test_translate_click_targets_button() {
    let layout = layout_slider(Rect::from_size(20, 3), &SliderConfig::default());
    let raw = mouse(MouseEventKind::Down(CtMouseButton::Left), 18, 1);

    assert_eq!(
        translate(&raw, &layout),
        Some(Event::Click {
            target: Some("rightButton".to_string()),
            x: 18,
            y: 1,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_translate_wheel_and_keys() {
    let layout = layout_slider(Rect::from_size(20, 3), &SliderConfig::default());

    let wheel = translate(&mouse(MouseEventKind::ScrollDown, 8, 1), &layout);
    assert!(matches!(
        wheel,
        Some(Event::Wheel { delta_x: 0, delta_y: 1, target: Some(ref t), .. }) if t == "scrollContainer"
    ));

    let key = CrosstermEvent::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    assert_eq!(
        translate(&key, &layout),
        Some(Event::Key {
            target: Some("scrollContainer".to_string()),
            key: Key::Left,
        })
    );

    assert_eq!(
        translate(&CrosstermEvent::Resize(80, 24), &layout),
        Some(Event::Resize {
            width: 80,
            height: 24
        })
    );
    assert_eq!(translate(&mouse(MouseEventKind::Moved, 1, 1), &layout), None);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_centers_content_without_overflow() {
    let area = Rect::from_size(20, 3);
    // 9 cells of content in a 14 cell viewport starting at x=3
    let (mut slider, layout) = slider_with(&["A", "B"], 4, 1, area);
    slider.refresh();
    let buf = render(&slider, &layout, area);

    // Lead of (14 - 9) / 2 = 2 puts the slides at x=5..9 and x=10..14
    assert_eq!(buf.get(4, 1).unwrap().bg, Rgb::new(0, 0, 0));
    assert_ne!(buf.get(5, 1).unwrap().bg, Rgb::new(0, 0, 0));
    assert_eq!(buf.get(6, 1).unwrap().ch, 'A');
    assert_eq!(buf.get(11, 1).unwrap().ch, 'B');

    // Buttons hidden
    assert_eq!(buf.get(1, 1).unwrap().ch, ' ');
    assert_eq!(buf.get(18, 1).unwrap().ch, ' ');
}

#[test]
fn test_render_buttons_when_overflowing() {
    let area = Rect::from_size(20, 3);
    let (mut slider, layout) = slider_with(&["one", "two", "three", "four"], 6, 1, area);
    slider.refresh();
    let buf = render(&slider, &layout, area);

    let left = buf.get(1, 1).unwrap();
    assert_eq!(left.ch, '<');
    assert_eq!(left.weight, Weight::Dim, "Left button should render disabled at the start");

    let right = buf.get(18, 1).unwrap();
    assert_eq!(right.ch, '>');
    assert_eq!(right.weight, Weight::Bold);

    // First slide is left-aligned in the viewport
    assert_ne!(buf.get(3, 0).unwrap().bg, Rgb::new(0, 0, 0));
    assert_eq!(&buf.row_text(1)[3..9], " one  ");
}

#[test]
fn test_render_follows_scroll_offset() {
    let area = Rect::from_size(20, 3);
    let (mut slider, layout) = slider_with(&["one", "two", "three", "four"], 6, 1, area);
    slider.container_mut().set_scroll_left(7);
    slider.refresh();
    let buf = render(&slider, &layout, area);

    // Second slide now starts at the viewport's left edge
    assert_eq!(&buf.row_text(1)[3..9], " two  ");
    assert_eq!(buf.get(1, 1).unwrap().weight, Weight::Bold);
}

#[test]
fn test_render_wide_label() {
    let area = Rect::from_size(20, 3);
    let (mut slider, layout) = slider_with(&["日本"], 6, 0, area);
    slider.refresh();
    let buf = render(&slider, &layout, area);

    // 6 cell slide centered in 14: lead 4, viewport starts at 3, label pad 1
    assert_eq!(buf.get(8, 1).unwrap().ch, '日');
    assert!(buf.get(9, 1).unwrap().continuation);
    assert_eq!(buf.get(10, 1).unwrap().ch, '本');
}

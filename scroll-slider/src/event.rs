use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::hit::hit_test;
use crate::layout::SliderLayout;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Initial load, sent once before the first frame
    Load,
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// A container's scroll offset changed
    Scrolled { target: String },
    /// Mouse wheel over an element
    Wheel {
        target: Option<String>,
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Key press event, targeted at the focused element
    Key { target: Option<String>, key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Left,
    Right,
    Home,
    End,
    Other,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Convert a raw terminal event into a targeted event.
/// Keys go to the container, the only focusable element.
pub fn translate(raw: &CrosstermEvent, layout: &SliderLayout) -> Option<Event> {
    match raw {
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
            target: Some(layout.container_id().to_string()),
            key: key.code.into(),
        }),
        CrosstermEvent::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            let target = hit_test(layout, x, y);
            let wheel = |delta_x, delta_y| Event::Wheel {
                target: target.clone(),
                x,
                y,
                delta_x,
                delta_y,
            };
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    target: target.clone(),
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::ScrollUp => Some(wheel(0, -1)),
                MouseEventKind::ScrollDown => Some(wheel(0, 1)),
                MouseEventKind::ScrollLeft => Some(wheel(-1, 0)),
                MouseEventKind::ScrollRight => Some(wheel(1, 0)),
                _ => None,
            }
        }
        _ => None,
    }
}

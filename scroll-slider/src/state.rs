//! Button state derived from container measurements.

use crate::types::{Display, Justify};

/// Layout measurements of a horizontally scrollable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurements {
    /// Current horizontal scroll offset.
    pub scroll_left: u16,
    /// Full extent of the content.
    pub scroll_width: u16,
    /// Visible extent of the container.
    pub client_width: u16,
}

impl Measurements {
    pub const fn new(scroll_left: u16, scroll_width: u16, client_width: u16) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Content extent exceeds the visible extent.
    pub const fn is_overflowing(&self) -> bool {
        self.scroll_width > self.client_width
    }

    /// Largest offset the content can be scrolled to.
    pub const fn max_scroll_left(&self) -> u16 {
        self.scroll_width.saturating_sub(self.client_width)
    }
}

/// Navigation state for the two slider buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    pub overflowing: bool,
    pub left_disabled: bool,
    pub right_disabled: bool,
}

impl SliderState {
    /// Container alignment and button display for this state.
    pub fn presentation(&self) -> Presentation {
        if self.overflowing {
            Presentation {
                justify: Justify::Start,
                buttons: Display::Block,
            }
        } else {
            Presentation {
                justify: Justify::Center,
                buttons: Display::None,
            }
        }
    }
}

/// What the container and buttons should look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub justify: Justify,
    pub buttons: Display,
}

/// Compute the slider state from current measurements.
///
/// The right button counts as at the end once `scroll_left` is within
/// `edge_tolerance` cells of the maximum offset. When the content does not
/// overflow, both disabled flags are false.
pub fn compute_state(m: Measurements, edge_tolerance: u16) -> SliderState {
    if !m.is_overflowing() {
        return SliderState::default();
    }

    let scroll_left = i32::from(m.scroll_left);
    let end = i32::from(m.scroll_width) - i32::from(m.client_width) - i32::from(edge_tolerance);

    SliderState {
        overflowing: true,
        left_disabled: scroll_left <= 0,
        right_disabled: scroll_left >= end,
    }
}

use crate::config::SliderConfig;

/// Width reserved for each navigation button.
pub const BUTTON_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Get the center point of this rectangle.
    pub const fn center(&self) -> (u16, u16) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }
}

/// Rects for the slider's three elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderLayout {
    pub left: (String, Rect),
    pub viewport: (String, Rect),
    pub right: (String, Rect),
}

impl SliderLayout {
    pub fn container_id(&self) -> &str {
        &self.viewport.0
    }

    /// Visible width of the container.
    pub fn client_width(&self) -> u16 {
        self.viewport.1.width
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        [&self.left, &self.viewport, &self.right]
            .into_iter()
            .find(|(el, _)| el == id)
            .map(|(_, rect)| *rect)
    }
}

/// Split an area into left button, viewport and right button.
///
/// Button gutters are reserved whether or not the buttons are shown, so the
/// viewport width never depends on the overflow it is used to measure.
pub fn layout_slider(area: Rect, config: &SliderConfig) -> SliderLayout {
    let button = BUTTON_WIDTH.min(area.width / 2);
    let inner = area.width.saturating_sub(button * 2);

    SliderLayout {
        left: (
            config.left_id.clone(),
            Rect::new(area.x, area.y, button, area.height),
        ),
        viewport: (
            config.container_id.clone(),
            Rect::new(area.x + button, area.y, inner, area.height),
        ),
        right: (
            config.right_id.clone(),
            Rect::new(area.x + button + inner, area.y, button, area.height),
        ),
    }
}

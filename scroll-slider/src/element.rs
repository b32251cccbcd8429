use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::error::SliderError;
use crate::scroll::{Easing, ScrollAnimation, ScrollRequest};
use crate::state::Measurements;
use crate::types::{Display, Justify, ScrollBehavior};

/// A horizontally scrollable element the slider reads and drives.
pub trait ScrollContainer {
    fn id(&self) -> &str;

    /// Current layout measurements.
    fn measurements(&self) -> Measurements;

    fn set_justify(&mut self, justify: Justify);

    /// Start a relative scroll. Completion is not reported back.
    /// Returns true if the offset moved right away.
    fn scroll_by(&mut self, request: ScrollRequest) -> bool;
}

/// A navigation control whose state the slider owns.
pub trait NavButton {
    fn id(&self) -> &str;

    fn set_display(&mut self, display: Display);

    fn set_disabled(&mut self, disabled: bool);

    /// Displayed and enabled.
    fn is_active(&self) -> bool;
}

/// A row of fixed-width slides inside a viewport.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    slides: Vec<String>,
    slide_width: u16,
    gap: u16,
    client_width: u16,
    scroll_left: u16,
    justify: Justify,
    animation: Option<ScrollAnimation>,
    duration: Duration,
    easing: Easing,
    reduced_motion: bool,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slides: Vec::new(),
            slide_width: 12,
            gap: 1,
            client_width: 0,
            scroll_left: 0,
            justify: Justify::default(),
            animation: None,
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            reduced_motion: false,
        }
    }

    pub fn slide(mut self, label: impl Into<String>) -> Self {
        self.slides.push(label.into());
        self
    }

    pub fn slides<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slides.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn slide_width(mut self, width: u16) -> Self {
        self.slide_width = width;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn client_width(mut self, width: u16) -> Self {
        self.client_width = width;
        self
    }

    /// Set the smooth scroll timing.
    pub fn animation(mut self, duration: Duration, easing: Easing) -> Self {
        self.duration = duration;
        self.easing = easing;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.slides
    }

    pub fn slide_size(&self) -> (u16, u16) {
        (self.slide_width, self.gap)
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    pub fn scroll_left(&self) -> u16 {
        self.scroll_left
    }

    /// Full extent of the slides, gaps included.
    pub fn scroll_width(&self) -> u16 {
        let count = u16::try_from(self.slides.len()).unwrap_or(u16::MAX);
        if count == 0 {
            return 0;
        }
        count
            .saturating_mul(self.slide_width)
            .saturating_add((count - 1).saturating_mul(self.gap))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the visible width after a layout pass.
    /// The offset is clamped to the new scroll range.
    pub fn set_client_width(&mut self, width: u16) {
        self.client_width = width;
        let max = self.measurements().max_scroll_left();
        if self.scroll_left > max {
            self.scroll_left = max;
        }
        if let Some(anim) = &mut self.animation {
            anim.from = anim.from.min(max);
            anim.to = anim.to.min(max);
        }
    }

    /// Jump to an offset, clamped to the scroll range. Cancels any animation.
    /// Returns true if the offset changed.
    pub fn set_scroll_left(&mut self, x: u16) -> bool {
        self.animation = None;
        let x = x.min(self.measurements().max_scroll_left());
        let changed = x != self.scroll_left;
        self.scroll_left = x;
        changed
    }

    /// Scroll with an explicit start time for smooth requests.
    /// Returns true if the offset moved right away.
    pub fn scroll_by_at(&mut self, request: ScrollRequest, now: Instant) -> bool {
        let max = i32::from(self.measurements().max_scroll_left());
        // Chained requests build on the pending target, not the mid-flight offset
        let base = self
            .animation
            .map(|anim| anim.to)
            .unwrap_or(self.scroll_left);
        let target = (i32::from(base) + request.left).clamp(0, max) as u16;

        if request.behavior == ScrollBehavior::Instant || self.reduced_motion {
            debug!("{}: jump {} -> {}", self.id, self.scroll_left, target);
            return self.set_scroll_left(target);
        }

        if target == self.scroll_left {
            self.animation = None;
            return false;
        }

        debug!("{}: smooth scroll {} -> {}", self.id, self.scroll_left, target);
        self.animation = Some(ScrollAnimation::new(
            self.scroll_left,
            target,
            now,
            self.duration,
            self.easing,
        ));
        false
    }

    /// Advance an in-flight smooth scroll.
    /// Returns true if the offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };

        let value = anim.value_at(now);
        if anim.is_finished(now) {
            self.animation = None;
        }

        if value != self.scroll_left {
            trace!("{}: scroll_left {}", self.id, value);
            self.scroll_left = value;
            true
        } else {
            false
        }
    }
}

impl ScrollContainer for Container {
    fn id(&self) -> &str {
        &self.id
    }

    fn measurements(&self) -> Measurements {
        Measurements::new(self.scroll_left, self.scroll_width(), self.client_width)
    }

    fn set_justify(&mut self, justify: Justify) {
        self.justify = justify;
    }

    fn scroll_by(&mut self, request: ScrollRequest) -> bool {
        self.scroll_by_at(request, Instant::now())
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    id: String,
    glyph: char,
    display: Display,
    disabled: bool,
}

impl Button {
    pub fn new(id: impl Into<String>, glyph: char) -> Self {
        Self {
            id: id.into(),
            glyph,
            display: Display::Block,
            disabled: false,
        }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl NavButton for Button {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_active(&self) -> bool {
        self.display == Display::Block && !self.disabled
    }
}

/// Elements registered by id, handed out once to their owner.
#[derive(Debug, Default)]
pub struct Elements {
    containers: HashMap<String, Container>,
    buttons: HashMap<String, Button>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: Container) -> Self {
        self.insert_container(container);
        self
    }

    pub fn button(mut self, button: Button) -> Self {
        self.insert_button(button);
        self
    }

    pub fn insert_container(&mut self, container: Container) {
        self.containers
            .insert(ScrollContainer::id(&container).to_string(), container);
    }

    pub fn insert_button(&mut self, button: Button) {
        self.buttons.insert(NavButton::id(&button).to_string(), button);
    }

    /// Remove and return the container with this id.
    pub fn take_container(&mut self, id: &str) -> Result<Container, SliderError> {
        self.containers
            .remove(id)
            .ok_or_else(|| SliderError::missing(id))
    }

    /// Remove and return the button with this id.
    pub fn take_button(&mut self, id: &str) -> Result<Button, SliderError> {
        self.buttons.remove(id).ok_or_else(|| SliderError::missing(id))
    }
}

use std::time::Instant;

use log::{debug, trace};

use crate::config::SliderConfig;
use crate::element::{Button, Container, Elements, NavButton, ScrollContainer};
use crate::error::SliderError;
use crate::event::{Event, Key};
use crate::scroll::ScrollRequest;
use crate::state::{compute_state, SliderState};
use crate::types::ScrollBehavior;

/// Keeps a container's navigation buttons in step with its scroll position
/// and pages the container one viewport at a time.
///
/// The slider holds no state of its own beyond the elements it was given;
/// every refresh recomputes button state from the container's measurements.
#[derive(Debug)]
pub struct ScrollSlider<C, B> {
    container: C,
    left: B,
    right: B,
    config: SliderConfig,
}

impl<C: ScrollContainer, B: NavButton> ScrollSlider<C, B> {
    pub fn new(container: C, left: B, right: B, config: SliderConfig) -> Self {
        Self {
            container,
            left,
            right,
            config,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn left(&self) -> &B {
        &self.left
    }

    pub fn right(&self) -> &B {
        &self.right
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// State the buttons would take for the current measurements.
    pub fn state(&self) -> SliderState {
        compute_state(self.container.measurements(), self.config.edge_tolerance)
    }

    /// Apply the current state to the container and buttons.
    ///
    /// Disabled flags are only written while the content overflows; hidden
    /// buttons keep whatever they had.
    pub fn refresh(&mut self) -> SliderState {
        let state = self.state();
        let presentation = state.presentation();

        self.container.set_justify(presentation.justify);
        self.left.set_display(presentation.buttons);
        self.right.set_display(presentation.buttons);

        if state.overflowing {
            self.left.set_disabled(state.left_disabled);
            self.right.set_disabled(state.right_disabled);
        }

        trace!("{}: refresh {:?}", self.container.id(), state);
        state
    }

    /// Scroll by `direction` viewport widths.
    /// Returns the request handed to the container.
    pub fn scroll(&mut self, direction: i16) -> ScrollRequest {
        let client_width = i32::from(self.container.measurements().client_width);
        let request = ScrollRequest::new(client_width * i32::from(direction), self.config.behavior);

        debug!("{}: scroll {:?}", self.container.id(), request);
        self.request(request);
        request
    }

    /// Scroll to the first or last offset.
    pub fn scroll_to_edge(&mut self, end: bool) -> ScrollRequest {
        let m = self.container.measurements();
        let left = if end {
            i32::from(m.max_scroll_left()) - i32::from(m.scroll_left)
        } else {
            -i32::from(m.scroll_left)
        };
        let request = ScrollRequest::new(left, self.config.behavior);

        debug!("{}: scroll to edge {:?}", self.container.id(), request);
        self.request(request);
        request
    }

    /// Hand a request to the container. An offset that moved right away
    /// counts as a scroll of the container.
    fn request(&mut self, request: ScrollRequest) -> bool {
        if !self.container.scroll_by(request) {
            return false;
        }
        let target = self.container.id().to_string();
        self.handle(&Event::Scrolled { target })
    }

    /// Route an event to refresh or scroll.
    /// Returns true if the event was handled.
    pub fn handle(&mut self, event: &Event) -> bool {
        match event {
            Event::Load | Event::Resize { .. } => {
                self.refresh();
                true
            }
            Event::Scrolled { target } if target == self.container.id() => {
                self.refresh();
                true
            }
            Event::Wheel {
                target: Some(target),
                delta_x,
                delta_y,
                ..
            } if target == self.container.id() => {
                // Vertical wheels drive the horizontal axis too
                let delta = if *delta_x != 0 { *delta_x } else { *delta_y };
                if delta == 0 || !self.state().overflowing {
                    return false;
                }
                self.request(ScrollRequest::new(i32::from(delta), ScrollBehavior::Instant));
                true
            }
            Event::Click {
                target: Some(target),
                ..
            } => self.activate(target),
            Event::Key {
                target: Some(target),
                key,
            } if target == self.container.id() => match key {
                Key::Left => {
                    let id = self.config.left_id.clone();
                    self.activate(&id)
                }
                Key::Right => {
                    let id = self.config.right_id.clone();
                    self.activate(&id)
                }
                Key::Home | Key::End if self.state().overflowing => {
                    self.scroll_to_edge(*key == Key::End);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Activate the button with this id, if it is shown and enabled.
    fn activate(&mut self, id: &str) -> bool {
        let direction = if id == self.left.id() && self.left.is_active() {
            -1
        } else if id == self.right.id() && self.right.is_active() {
            1
        } else {
            return false;
        };

        self.scroll(direction);
        true
    }
}

impl ScrollSlider<Container, Button> {
    /// Build a slider from registered elements, failing if any id is missing.
    pub fn from_registry(elements: &mut Elements, config: SliderConfig) -> Result<Self, SliderError> {
        let container = elements
            .take_container(&config.container_id)?
            .animation(config.duration, config.easing)
            .reduced_motion(config.reduced_motion);
        let left = elements.take_button(&config.left_id)?;
        let right = elements.take_button(&config.right_id)?;

        Ok(Self::new(container, left, right, config))
    }

    /// Advance the container's smooth scroll, refreshing if it moved.
    /// Returns true if the offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.container.tick(now) {
            return false;
        }
        let target = self.container.id().to_string();
        self.handle(&Event::Scrolled { target })
    }

    /// Resize the viewport after a layout pass and refresh.
    pub fn set_client_width(&mut self, width: u16) {
        self.container.set_client_width(width);
        self.refresh();
    }
}

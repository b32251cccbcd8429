//! Slider configuration

use std::time::Duration;

use crate::scroll::Easing;
use crate::types::ScrollBehavior;

/// Configuration for a [`ScrollSlider`](crate::ScrollSlider).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use scroll_slider::{ScrollBehavior, SliderConfig};
///
/// let config = SliderConfig::default()
///     .with_edge_tolerance(2)
///     .with_behavior(ScrollBehavior::Instant)
///     .with_duration(Duration::from_millis(150));
/// ```
#[derive(Debug, Clone)]
pub struct SliderConfig {
    /// Id of the scrollable container.
    ///
    /// Default: `"scrollContainer"`
    pub container_id: String,

    /// Id of the "previous" button.
    ///
    /// Default: `"leftButton"`
    pub left_id: String,

    /// Id of the "next" button.
    ///
    /// Default: `"rightButton"`
    pub right_id: String,

    /// Cells before the true end at which the right button disables.
    ///
    /// Absorbs rounding at the scroll end. Default: 1
    pub edge_tolerance: u16,

    /// Behavior of button-triggered scrolls.
    ///
    /// Default: smooth
    pub behavior: ScrollBehavior,

    /// Length of a smooth scroll.
    ///
    /// Default: 300ms
    pub duration: Duration,

    /// Easing of a smooth scroll.
    ///
    /// Default: ease-in-out
    pub easing: Easing,

    /// Complete smooth scrolls instantly.
    ///
    /// Default: false
    pub reduced_motion: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container_id: "scrollContainer".to_string(),
            left_id: "leftButton".to_string(),
            right_id: "rightButton".to_string(),
            edge_tolerance: 1,
            behavior: ScrollBehavior::Smooth,
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            reduced_motion: false,
        }
    }
}

impl SliderConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the three element ids.
    pub fn with_ids(
        mut self,
        container: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.container_id = container.into();
        self.left_id = left.into();
        self.right_id = right.into();
        self
    }

    /// Sets the right-edge tolerance.
    pub fn with_edge_tolerance(mut self, tolerance: u16) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    /// Sets the scroll behavior.
    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Sets the smooth scroll duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the smooth scroll easing.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Enables or disables reduced motion.
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}

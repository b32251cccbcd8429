use std::time::{Duration, Instant};

use crate::types::ScrollBehavior;

/// A relative scroll along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Signed distance in cells.
    pub left: i32,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub const fn new(left: i32, behavior: ScrollBehavior) -> Self {
        Self { left, behavior }
    }
}

/// Easing function for smooth scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// An in-flight smooth scroll between two offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    pub from: u16,
    pub to: u16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: u16, to: u16, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Progress in 0.0..=1.0 at `now`.
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated offset at `now`.
    pub fn value_at(&self, now: Instant) -> u16 {
        let t = self.easing.apply(self.progress(now));
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * t).round().clamp(0.0, f32::from(u16::MAX)) as u16
    }
}

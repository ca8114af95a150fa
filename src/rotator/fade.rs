// SPDX-License-Identifier: MPL-2.0
//! Opacity interpolation for the cross-fade between items.

use std::time::{Duration, Instant};

/// Easing applied to the opacity transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
    EaseOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Tracks the last visibility flip so the view can draw intermediate
/// opacity values while the transition runs.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    target_visible: bool,
    from_opacity: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Fade {
    /// A fade resting at `visible` with no transition in flight.
    #[must_use]
    pub fn settled(visible: bool, duration: Duration, easing: Easing) -> Self {
        Self {
            target_visible: visible,
            from_opacity: if visible { 1.0 } else { 0.0 },
            started_at: None,
            duration,
            easing,
        }
    }

    /// Starts a transition towards `visible`, continuing from whatever
    /// opacity is currently displayed.
    pub fn retarget(&mut self, visible: bool, now: Instant) {
        if visible == self.target_visible {
            return;
        }
        self.from_opacity = self.opacity(now);
        self.target_visible = visible;
        self.started_at = Some(now);
    }

    /// Opacity in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let target = if self.target_visible { 1.0 } else { 0.0 };
        let Some(started_at) = self.started_at else {
            return target;
        };
        if self.duration.is_zero() {
            return target;
        }
        let elapsed = now.saturating_duration_since(started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        self.from_opacity + (target - self.from_opacity) * eased
    }

    /// Whether a transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }
}

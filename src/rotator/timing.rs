// SPDX-License-Identifier: MPL-2.0
//! Cadence and fade durations for a rotator.

use crate::app::config::{
    DEFAULT_CYCLE_MS, DEFAULT_FADE_MS, DEFAULT_INITIAL_REVEAL_MS, DEFAULT_SETTLE_MS, MAX_CYCLE_MS,
    MAX_FADE_MS, MAX_INITIAL_REVEAL_MS, MAX_SETTLE_MS, MIN_CYCLE_GAP_MS, MIN_CYCLE_MS,
};
use std::time::Duration;

/// Durations driving one rotator.
///
/// Values are clamped on construction, and the cycle period is raised when
/// needed so that `fade + settle` always finishes before the next cycle
/// starts. A cycle therefore never overlaps the one after it. The initial
/// reveal is capped to `cycle - fade - settle` so its fade-in completes
/// before the first fade-out begins.
///
/// # Example
///
/// ```
/// use iced_hero::rotator::RotatorTimings;
/// use std::time::Duration;
///
/// let timings = RotatorTimings::from_millis(2_000, 1_500, 900, None);
/// assert!(timings.cycle() > timings.fade() + timings.settle());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotatorTimings {
    cycle: Duration,
    fade: Duration,
    settle: Duration,
    initial_reveal: Option<Duration>,
}

impl RotatorTimings {
    /// Builds timings from millisecond values, clamping each into range.
    #[must_use]
    pub fn from_millis(
        cycle_ms: u64,
        fade_ms: u64,
        settle_ms: u64,
        initial_reveal_ms: Option<u64>,
    ) -> Self {
        let fade_ms = fade_ms.min(MAX_FADE_MS);
        let settle_ms = settle_ms.min(MAX_SETTLE_MS);
        let floor = (fade_ms + settle_ms + MIN_CYCLE_GAP_MS).max(MIN_CYCLE_MS);
        let cycle_ms = cycle_ms.clamp(MIN_CYCLE_MS, MAX_CYCLE_MS).max(floor);
        let reveal_limit = MAX_INITIAL_REVEAL_MS.min(cycle_ms.saturating_sub(fade_ms + settle_ms));

        Self {
            cycle: Duration::from_millis(cycle_ms),
            fade: Duration::from_millis(fade_ms),
            settle: Duration::from_millis(settle_ms),
            initial_reveal: initial_reveal_ms
                .map(|ms| Duration::from_millis(ms.min(reveal_limit))),
        }
    }

    /// Timings of the headline: 5 s cadence with a one-time reveal on mount.
    #[must_use]
    pub fn headline() -> Self {
        Self::from_millis(
            DEFAULT_CYCLE_MS,
            DEFAULT_FADE_MS,
            DEFAULT_SETTLE_MS,
            Some(DEFAULT_INITIAL_REVEAL_MS),
        )
    }

    /// Timings of the news ticker: same cadence, visible from the start.
    #[must_use]
    pub fn ticker() -> Self {
        Self::from_millis(DEFAULT_CYCLE_MS, DEFAULT_FADE_MS, DEFAULT_SETTLE_MS, None)
    }

    /// Period between the starts of two consecutive cycles.
    #[must_use]
    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    /// Fade-out length; the index changes once it has elapsed.
    #[must_use]
    pub fn fade(&self) -> Duration {
        self.fade
    }

    /// Delay between the index change and the start of the fade-in.
    #[must_use]
    pub fn settle(&self) -> Duration {
        self.settle
    }

    /// One-time delay before the first fade-in, if the rotator starts hidden.
    #[must_use]
    pub fn initial_reveal(&self) -> Option<Duration> {
        self.initial_reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_defaults_match_cadence() {
        let timings = RotatorTimings::headline();
        assert_eq!(timings.cycle(), Duration::from_millis(5_000));
        assert_eq!(timings.fade(), Duration::from_millis(1_500));
        assert_eq!(timings.settle(), Duration::from_millis(100));
        assert_eq!(timings.initial_reveal(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn ticker_has_no_initial_reveal() {
        assert_eq!(RotatorTimings::ticker().initial_reveal(), None);
    }

    #[test]
    fn cycle_is_raised_above_fade_and_settle() {
        let timings = RotatorTimings::from_millis(1_000, 1_500, 100, None);
        assert!(timings.cycle() > timings.fade() + timings.settle());
    }

    #[test]
    fn values_are_clamped_to_maximums() {
        let timings = RotatorTimings::from_millis(u64::MAX, u64::MAX, u64::MAX, Some(u64::MAX));
        assert_eq!(timings.fade(), Duration::from_millis(MAX_FADE_MS));
        assert_eq!(timings.settle(), Duration::from_millis(MAX_SETTLE_MS));
        assert_eq!(timings.cycle(), Duration::from_millis(MAX_CYCLE_MS));
        assert_eq!(
            timings.initial_reveal(),
            Some(Duration::from_millis(MAX_INITIAL_REVEAL_MS))
        );
    }

    #[test]
    fn reveal_finishes_before_the_first_fade_out() {
        let timings = RotatorTimings::from_millis(1_000, 500, 100, Some(9_000));
        let reveal = timings.initial_reveal().expect("reveal kept");
        assert_eq!(reveal, Duration::from_millis(400));
        assert!(reveal + timings.fade() + timings.settle() <= timings.cycle());
    }

    #[test]
    fn zero_cycle_is_raised_to_minimum() {
        let timings = RotatorTimings::from_millis(0, 0, 0, None);
        assert_eq!(timings.cycle(), Duration::from_millis(MIN_CYCLE_MS));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Timed content rotation with a cross-fade between items.
//!
//! A [`Rotator`] owns a fixed [`ContentList`] and a [`RotatorState`]. It
//! advances on a fixed cadence, fading the current item out, switching while
//! nothing is visible, then fading the next item in. The ticker variant also
//! accepts manual previous/next navigation, which applies immediately and
//! leaves the automatic cadence running.
//!
//! The timers live in a per-rotator subscription (see [`cycle`]). Unmounting
//! removes that subscription. Every phase carries the generation of the cycle
//! that produced it; events arriving while unmounted, or from a cycle that
//! was replaced by a remount, are ignored.

pub mod content;
pub mod cycle;
pub mod fade;
pub mod state;
pub mod timing;

pub use content::{ContentItem, ContentList, RichText, Segment};
pub use cycle::{CyclePhase, Schedule, Tick};
pub use fade::{Easing, Fade};
pub use state::{Direction, RotatorState};
pub use timing::RotatorTimings;

use crate::content::Link;
use iced::Subscription;
use std::time::Instant;

/// The two rotator flavors shown in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Large cycling headline; starts hidden and fades in after mount.
    Headline,
    /// News ticker; starts visible and accepts manual navigation.
    Ticker,
}

impl Variant {
    #[must_use]
    pub fn initially_visible(self) -> bool {
        matches!(self, Variant::Ticker)
    }

    #[must_use]
    pub fn allows_manual_navigation(self) -> bool {
        matches!(self, Variant::Ticker)
    }

    fn easing(self) -> Easing {
        match self {
            Variant::Headline => Easing::EaseInOut,
            Variant::Ticker => Easing::EaseOut,
        }
    }

    fn slot(self) -> &'static str {
        match self {
            Variant::Headline => "headline",
            Variant::Ticker => "ticker",
        }
    }
}

/// Messages handled by a rotator.
#[derive(Debug, Clone)]
pub enum Message {
    /// A timed phase from the cycle subscription.
    Cycle(Tick),
    /// Manual previous/next control.
    Navigate(Direction),
    /// The displayed item was clicked.
    Activate,
}

/// Effects produced by a rotator for the parent to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenLink(Link),
}

/// Timer-driven cycle over a fixed content list.
#[derive(Debug, Clone)]
pub struct Rotator<T> {
    variant: Variant,
    items: ContentList<T>,
    timings: RotatorTimings,
    state: RotatorState,
    fade: Fade,
    mounted: bool,
    generation: u64,
}

impl<T> Rotator<T> {
    /// Creates a mounted rotator in its initial state.
    #[must_use]
    pub fn new(variant: Variant, items: ContentList<T>, timings: RotatorTimings) -> Self {
        let visible = variant.initially_visible();
        Self {
            variant,
            items,
            timings,
            state: RotatorState::new(visible),
            fade: Fade::settled(visible, timings.fade(), variant.easing()),
            mounted: true,
            generation: 0,
        }
    }

    /// Mounts the rotator again with a fresh state and a fresh cycle.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let visible = self.variant.initially_visible();
        self.state = RotatorState::new(visible);
        self.fade = Fade::settled(visible, self.timings.fade(), self.variant.easing());
        self.generation += 1;
        self.mounted = true;
        tracing::debug!(slot = self.variant.slot(), "rotator mounted");
    }

    /// Tears the rotator down; its cycle subscription is dropped on the
    /// next subscription pass and late events are ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            tracing::debug!(slot = self.variant.slot(), "rotator unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn state(&self) -> RotatorState {
        self.state
    }

    #[must_use]
    pub fn timings(&self) -> RotatorTimings {
        self.timings
    }

    #[must_use]
    pub fn items(&self) -> &ContentList<T> {
        &self.items
    }

    /// The item currently selected.
    #[must_use]
    pub fn current(&self) -> &ContentItem<T> {
        self.items.get(self.state.current_index())
    }

    /// Opacity to draw the current item with at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade.opacity(now)
    }

    /// Whether the fade is mid-transition at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.mounted && self.fade.is_animating(now)
    }

    /// Steps the index directly.
    ///
    /// This is the manual navigation path; it does not touch visibility or
    /// the cadence.
    pub fn advance(&mut self, direction: Direction) {
        self.state.advance(direction, self.items.len());
    }

    /// Handles a message using the current time for the fade.
    pub fn handle(&mut self, message: Message) -> Effect {
        self.handle_at(message, Instant::now())
    }

    /// Handles a message, stamping any visibility change with `now`.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Effect {
        if !self.mounted {
            return Effect::None;
        }

        match message {
            Message::Cycle(Tick { generation, phase }) => {
                if generation != self.generation {
                    tracing::trace!(
                        slot = self.variant.slot(),
                        generation,
                        "stale cycle event ignored"
                    );
                    return Effect::None;
                }
                match phase {
                    CyclePhase::Reveal | CyclePhase::FadeIn => self.set_visible(true, now),
                    CyclePhase::FadeOut => self.set_visible(false, now),
                    CyclePhase::Advance => self.advance(Direction::Next),
                }
                Effect::None
            }
            Message::Navigate(direction) => {
                if self.variant.allows_manual_navigation() {
                    self.advance(direction);
                }
                Effect::None
            }
            Message::Activate => match &self.current().target {
                Some(link) => Effect::OpenLink(link.clone()),
                None => Effect::None,
            },
        }
    }

    fn set_visible(&mut self, visible: bool, now: Instant) {
        self.state.set_visible(visible);
        self.fade.retarget(visible, now);
    }

    /// Message for `phase` of the current cycle.
    #[must_use]
    pub fn cycle_message(&self, phase: CyclePhase) -> Message {
        Message::Cycle(Tick {
            generation: self.generation,
            phase,
        })
    }

    /// Identity of the running cycle.
    #[must_use]
    pub fn schedule(&self) -> Schedule {
        Schedule {
            slot: self.variant.slot(),
            generation: self.generation,
            timings: self.timings,
        }
    }

    /// Cycle subscription while mounted; none once unmounted.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.mounted {
            cycle::subscription(self.schedule()).map(Message::Cycle)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(len: u32) -> ContentList<String> {
        ContentList::new(
            (1..=len)
                .map(|id| {
                    ContentItem::new(id, format!("item {id}"))
                        .with_target(Link::new(format!("https://example.com/{id}")))
                })
                .collect(),
        )
        .expect("non-empty list")
    }

    fn ticker(len: u32) -> Rotator<String> {
        Rotator::new(Variant::Ticker, news(len), RotatorTimings::ticker())
    }

    fn run_cycle<T>(rotator: &mut Rotator<T>) -> Vec<(bool, usize)> {
        let now = Instant::now();
        [CyclePhase::FadeOut, CyclePhase::Advance, CyclePhase::FadeIn]
            .into_iter()
            .map(|phase| {
                let message = rotator.cycle_message(phase);
                rotator.handle_at(message, now);
                let state = rotator.state();
                (state.is_visible(), state.current_index())
            })
            .collect()
    }

    #[test]
    fn variants_start_with_expected_visibility() {
        let headline = Rotator::new(Variant::Headline, news(3), RotatorTimings::headline());
        assert!(!headline.state().is_visible());
        assert_eq!(headline.state().current_index(), 0);

        assert!(ticker(3).state().is_visible());
    }

    #[test]
    fn one_cycle_changes_index_once_while_hidden() {
        let mut rotator = ticker(5);
        let observed = run_cycle(&mut rotator);
        assert_eq!(observed, vec![(false, 0), (false, 1), (true, 1)]);
    }

    #[test]
    fn five_cycles_return_to_first_item() {
        let mut rotator = ticker(5);
        run_cycle(&mut rotator);
        assert_eq!(rotator.state().current_index(), 1);
        for _ in 0..4 {
            run_cycle(&mut rotator);
        }
        assert_eq!(rotator.state().current_index(), 0);
    }

    #[test]
    fn manual_previous_wraps_immediately_in_any_phase() {
        let mut rotator = ticker(5);
        rotator.handle(rotator.cycle_message(CyclePhase::FadeOut));
        rotator.handle(Message::Navigate(Direction::Previous));
        assert_eq!(rotator.state().current_index(), 4);
        assert!(!rotator.state().is_visible());
    }

    #[test]
    fn manual_and_automatic_advance_both_apply() {
        let mut rotator = ticker(5);
        rotator.handle(rotator.cycle_message(CyclePhase::FadeOut));
        rotator.handle(Message::Navigate(Direction::Next));
        rotator.handle(rotator.cycle_message(CyclePhase::Advance));
        assert_eq!(rotator.state().current_index(), 2);
    }

    #[test]
    fn headline_ignores_manual_navigation() {
        let mut rotator = Rotator::new(Variant::Headline, news(3), RotatorTimings::headline());
        rotator.handle(Message::Navigate(Direction::Next));
        assert_eq!(rotator.state().current_index(), 0);
    }

    #[test]
    fn headline_reveal_shows_content() {
        let mut rotator = Rotator::new(Variant::Headline, news(3), RotatorTimings::headline());
        rotator.handle(rotator.cycle_message(CyclePhase::Reveal));
        assert!(rotator.state().is_visible());
        assert_eq!(rotator.state().current_index(), 0);
    }

    #[test]
    fn unmounted_rotator_ignores_late_events() {
        let mut rotator = ticker(5);
        rotator.handle(rotator.cycle_message(CyclePhase::FadeOut));
        rotator.unmount();
        let before = rotator.state();

        rotator.handle(rotator.cycle_message(CyclePhase::Advance));
        rotator.handle(rotator.cycle_message(CyclePhase::FadeIn));
        rotator.handle(Message::Navigate(Direction::Next));

        assert_eq!(rotator.state(), before);
        assert!(!rotator.is_mounted());
    }

    #[test]
    fn remount_starts_fresh_with_new_schedule() {
        let mut rotator = ticker(5);
        run_cycle(&mut rotator);
        let old_schedule = rotator.schedule();

        rotator.unmount();
        rotator.mount();

        assert_eq!(rotator.state().current_index(), 0);
        assert!(rotator.state().is_visible());
        assert_ne!(rotator.schedule(), old_schedule);
    }

    #[test]
    fn phases_from_a_replaced_cycle_are_ignored() {
        let mut rotator = ticker(5);
        let stale = rotator.cycle_message(CyclePhase::FadeOut);

        rotator.unmount();
        rotator.mount();
        rotator.handle(stale);
        assert!(rotator.state().is_visible());

        let stale_advance = Message::Cycle(Tick {
            generation: 0,
            phase: CyclePhase::Advance,
        });
        rotator.handle(stale_advance);
        assert_eq!(rotator.state().current_index(), 0);

        let current = rotator.cycle_message(CyclePhase::Advance);
        rotator.handle(current);
        assert_eq!(rotator.state().current_index(), 1);
    }

    #[test]
    fn activate_opens_current_target() {
        let mut rotator = ticker(3);
        rotator.handle(Message::Navigate(Direction::Next));
        assert_eq!(
            rotator.handle(Message::Activate),
            Effect::OpenLink(Link::new("https://example.com/2"))
        );
    }

    #[test]
    fn activate_without_target_does_nothing() {
        let list = ContentList::new(vec![ContentItem::new(1, "plain")]).expect("non-empty list");
        let mut rotator = Rotator::new(Variant::Headline, list, RotatorTimings::headline());
        assert_eq!(rotator.handle(Message::Activate), Effect::None);
    }

    #[test]
    fn fade_out_animates_opacity() {
        let mut rotator = ticker(2);
        let now = Instant::now();
        rotator.handle_at(rotator.cycle_message(CyclePhase::FadeOut), now);
        assert!(rotator.is_animating(now));
        assert!(rotator.opacity(now + rotator.timings().fade()) < 1e-4);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Cancellable cycle task driving a rotator.
//!
//! Each rotator gets one stream of [`CyclePhase`] events. The stream awaits
//! the cadence tick, then the fade delay, then the settle delay, and yields
//! one event after each wait. Because every delay is awaited inside the same
//! stream, dropping the stream cancels the recurring tick and any nested
//! delay that is in flight. Iced drops it when the rotator's subscription
//! disappears, which is how unmounting tears the timers down.

use super::timing::RotatorTimings;
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// One timed step of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// One-time fade-in after mount.
    Reveal,
    /// Cycle start: the current item begins to fade out.
    FadeOut,
    /// The fade-out has completed; move to the next item.
    Advance,
    /// The new item has settled; begin fading in.
    FadeIn,
}

/// A phase stamped with the generation of the cycle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub phase: CyclePhase,
}

/// Identity of a rotator's cycle subscription.
///
/// Two schedules with equal keys share one running stream; changing either
/// the slot or the timings restarts the cycle from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub slot: &'static str,
    pub generation: u64,
    pub timings: RotatorTimings,
}

impl Schedule {
    /// Builds the event stream for this schedule.
    #[must_use]
    pub fn events(&self) -> BoxStream<'static, CyclePhase> {
        cycle_events(self.timings)
    }
}

enum Step {
    Start,
    Waiting(Interval),
    FadedOut(Interval),
    Advanced(Interval),
}

/// Creates the phase stream for `timings`.
///
/// The cadence is anchored at the first poll: the first `FadeOut` arrives one
/// full `cycle` after that, then every `cycle` thereafter. When the timings
/// request an initial reveal, a single `Reveal` is merged in after that
/// delay, independent of the recurring cycle.
#[must_use]
pub fn cycle_events(timings: RotatorTimings) -> BoxStream<'static, CyclePhase> {
    let cycle = stream::unfold(Step::Start, move |step| async move {
        let (phase, next) = match step {
            Step::Start => {
                let first_tick = Instant::now() + timings.cycle();
                let mut ticker = time::interval_at(first_tick, timings.cycle());
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                ticker.tick().await;
                (CyclePhase::FadeOut, Step::FadedOut(ticker))
            }
            Step::Waiting(mut ticker) => {
                ticker.tick().await;
                (CyclePhase::FadeOut, Step::FadedOut(ticker))
            }
            Step::FadedOut(ticker) => {
                time::sleep(timings.fade()).await;
                (CyclePhase::Advance, Step::Advanced(ticker))
            }
            Step::Advanced(ticker) => {
                time::sleep(timings.settle()).await;
                (CyclePhase::FadeIn, Step::Waiting(ticker))
            }
        };
        Some((phase, next))
    });

    match timings.initial_reveal() {
        Some(delay) => {
            let reveal = stream::once(async move {
                time::sleep(delay).await;
                CyclePhase::Reveal
            });
            stream::select(reveal, cycle).boxed()
        }
        None => cycle.boxed(),
    }
}

/// Subscription running the cycle for `schedule`.
pub fn subscription(schedule: Schedule) -> iced::Subscription<Tick> {
    let generation = schedule.generation;
    iced::Subscription::run_with_id(
        schedule,
        schedule
            .events()
            .map(move |phase| Tick { generation, phase }),
    )
}

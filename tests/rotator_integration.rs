// SPDX-License-Identifier: MPL-2.0
use futures_util::StreamExt;
use iced_hero::content;
use iced_hero::rotator::{
    self, ContentItem, ContentList, CyclePhase, Direction, Rotator, RotatorTimings, Variant,
};
use std::time::Duration;
use tokio::time::{self, Instant};

fn numbered(len: u32) -> ContentList<String> {
    ContentList::new(
        (1..=len)
            .map(|id| ContentItem::new(id, format!("item {id}")))
            .collect(),
    )
    .expect("non-empty list")
}

/// Feeds `count` events of the rotator's own cycle stream back into it,
/// recording the state after each one together with the elapsed time.
async fn drive<T>(
    rotator: &mut Rotator<T>,
    count: usize,
) -> Vec<(CyclePhase, Duration, bool, usize)> {
    let start = Instant::now();
    let mut events = rotator.schedule().events();
    let mut seen = Vec::with_capacity(count);
    while seen.len() < count {
        let phase = events.next().await.expect("cycle stream never ends");
        let message = rotator.cycle_message(phase);
        rotator.handle(message);
        let state = rotator.state();
        seen.push((
            phase,
            start.elapsed(),
            state.is_visible(),
            state.current_index(),
        ));
    }
    seen
}

#[tokio::test(start_paused = true)]
async fn one_cycle_hides_advances_then_shows() {
    let mut ticker = Rotator::new(Variant::Ticker, numbered(5), RotatorTimings::ticker());
    let seen = drive(&mut ticker, 3).await;

    let (phase, at, visible, index) = seen[0];
    assert_eq!(phase, CyclePhase::FadeOut);
    assert!(at >= Duration::from_millis(5_000));
    assert!(!visible);
    assert_eq!(index, 0);

    let (phase, at, visible, index) = seen[1];
    assert_eq!(phase, CyclePhase::Advance);
    assert!(at >= Duration::from_millis(6_500));
    assert!(!visible);
    assert_eq!(index, 1);

    let (phase, at, visible, index) = seen[2];
    assert_eq!(phase, CyclePhase::FadeIn);
    assert!(at >= Duration::from_millis(6_600));
    assert!(visible);
    assert_eq!(index, 1);
}

#[tokio::test(start_paused = true)]
async fn five_cycles_over_five_items_return_to_start() {
    let mut ticker = Rotator::new(Variant::Ticker, numbered(5), RotatorTimings::ticker());
    let seen = drive(&mut ticker, 15).await;

    let indices: Vec<usize> = seen
        .iter()
        .filter(|(phase, ..)| *phase == CyclePhase::FadeIn)
        .map(|(.., index)| *index)
        .collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 0]);
}

#[tokio::test(start_paused = true)]
async fn headline_becomes_visible_once_after_reveal_delay() {
    let mut headline = Rotator::new(
        Variant::Headline,
        content::headlines().expect("headlines"),
        RotatorTimings::headline(),
    );
    assert!(!headline.state().is_visible());

    let seen = drive(&mut headline, 4).await;
    let (phase, at, visible, index) = seen[0];
    assert_eq!(phase, CyclePhase::Reveal);
    assert!(at >= Duration::from_millis(500) && at < Duration::from_millis(5_000));
    assert!(visible);
    assert_eq!(index, 0);

    assert!(seen[1..]
        .iter()
        .all(|(phase, ..)| *phase != CyclePhase::Reveal));
}

#[tokio::test(start_paused = true)]
async fn manual_previous_during_fade_applies_immediately() {
    let mut ticker = Rotator::new(Variant::Ticker, numbered(5), RotatorTimings::ticker());
    let mut events = ticker.schedule().events();

    let phase = events.next().await.expect("fade-out");
    let message = ticker.cycle_message(phase);
    ticker.handle(message);
    ticker.handle(rotator::Message::Navigate(Direction::Previous));
    assert_eq!(ticker.state().current_index(), 4);
    assert!(!ticker.state().is_visible());

    // The cadence keeps running: the pending advance still fires.
    let phase = events.next().await.expect("advance");
    assert_eq!(phase, CyclePhase::Advance);
    let message = ticker.cycle_message(phase);
    ticker.handle(message);
    assert_eq!(ticker.state().current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn unmounting_mid_cycle_freezes_state() {
    let mut ticker = Rotator::new(Variant::Ticker, numbered(5), RotatorTimings::ticker());
    let mut events = ticker.schedule().events();

    let phase = events.next().await.expect("fade-out");
    let message = ticker.cycle_message(phase);
    ticker.handle(message);
    ticker.unmount();
    let frozen = ticker.state();

    // Anything that was already queued is ignored.
    for _ in 0..6 {
        let phase = events.next().await.expect("phase");
        let message = ticker.cycle_message(phase);
        ticker.handle(message);
    }
    drop(events);
    time::sleep(Duration::from_secs(60)).await;

    assert_eq!(ticker.state(), frozen);
    assert!(!ticker.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn remount_ignores_phases_from_the_previous_cycle() {
    let mut ticker = Rotator::new(Variant::Ticker, numbered(5), RotatorTimings::ticker());
    let old_generation = ticker.schedule().generation;
    let mut old_events = ticker.schedule().events();
    let phase = old_events.next().await.expect("fade-out");
    let queued = ticker.cycle_message(phase);

    ticker.unmount();
    ticker.mount();
    assert_ne!(ticker.schedule().generation, old_generation);

    // Delivered after the remount, from the cycle that was torn down.
    ticker.handle(queued);
    let phase = old_events.next().await.expect("advance");
    let stale = rotator::Message::Cycle(rotator::Tick {
        generation: old_generation,
        phase,
    });
    ticker.handle(stale);

    assert!(ticker.state().is_visible());
    assert_eq!(ticker.state().current_index(), 0);
}

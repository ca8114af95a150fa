// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Rotation**: Cadence, fade and settle durations of the rotators
//! - **Video**: Background video playback
//! - **Layout**: Breakpoints used by the hero layout

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default period between two rotation cycles (milliseconds).
pub const DEFAULT_CYCLE_MS: u64 = 5_000;

/// Default fade-out duration; the item changes once it has elapsed.
pub const DEFAULT_FADE_MS: u64 = 1_500;

/// Default delay between switching items and starting the fade-in.
pub const DEFAULT_SETTLE_MS: u64 = 100;

/// Default one-time delay before the headline first fades in.
pub const DEFAULT_INITIAL_REVEAL_MS: u64 = 500;

/// Shortest allowed cycle period.
pub const MIN_CYCLE_MS: u64 = 1_000;

/// Longest allowed cycle period.
pub const MAX_CYCLE_MS: u64 = 60_000;

/// Longest allowed fade.
pub const MAX_FADE_MS: u64 = 10_000;

/// Longest allowed settle delay.
pub const MAX_SETTLE_MS: u64 = 2_000;

/// Longest allowed initial reveal delay.
pub const MAX_INITIAL_REVEAL_MS: u64 = 10_000;

/// Minimum time a fully faded-in item stays on screen before the next cycle.
pub const MIN_CYCLE_GAP_MS: u64 = 100;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Background video starts playing as soon as it is loaded.
pub const DEFAULT_VIDEO_AUTOPLAY: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width below which the navigation collapses into a menu button
/// and the ticker label shortens.
pub const COMPACT_WIDTH_BREAKPOINT: f32 = 900.0;

const _: () = {
    assert!(MAX_CYCLE_MS >= MAX_FADE_MS + MAX_SETTLE_MS + MIN_CYCLE_GAP_MS);
    assert!(DEFAULT_CYCLE_MS > DEFAULT_FADE_MS + DEFAULT_SETTLE_MS);
    assert!(MIN_CYCLE_MS <= DEFAULT_CYCLE_MS);
};

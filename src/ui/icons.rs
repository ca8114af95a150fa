// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`, so every call after the first is a cheap
//! clone. Glyphs are single-color and get tinted at the call site with
//! [`tinted`]; the logo keeps its own colors.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let chevron = icons::tinted(icons::chevron_left(), 14.0, palette::ACCENT);
//! ```

use crate::content::Icon;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(fingerprint, "fingerprint.svg", "Fingerprint arcs.");
define_icon!(dna_helix, "dna-helix.svg", "Double helix.");
define_icon!(dice, "dice.svg", "Die showing three.");
define_icon!(giving_back, "giving-back.svg", "Heart above an open hand.");
define_icon!(thought_leadership, "thought-leadership.svg", "Light bulb.");
define_icon!(careers, "careers.svg", "Briefcase.");
define_icon!(contact, "contact.svg", "Envelope.");

// =============================================================================
// Social
// =============================================================================

define_icon!(linkedin, "linkedin.svg", "LinkedIn mark.");
define_icon!(x_twitter, "x-twitter.svg", "X mark.");
define_icon!(facebook, "facebook.svg", "Facebook mark.");

// =============================================================================
// Controls
// =============================================================================

define_icon!(chevron_left, "chevron-left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron-right.svg", "Chevron pointing right.");
define_icon!(menu, "menu.svg", "Three horizontal bars.");
define_icon!(close, "close.svg", "Diagonal cross.");
define_icon!(play, "play.svg", "Triangle pointing right.");
define_icon!(pause, "pause.svg", "Two vertical bars.");

define_icon!(logo, "logo.svg", "Brand mark, drawn in its own colors.");

/// Handle for a content icon.
pub fn for_icon(icon: Icon) -> Handle {
    match icon {
        Icon::Search => search(),
        Icon::Fingerprint => fingerprint(),
        Icon::DnaHelix => dna_helix(),
        Icon::Dice => dice(),
        Icon::GivingBack => giving_back(),
        Icon::ThoughtLeadership => thought_leadership(),
        Icon::Careers => careers(),
        Icon::Contact => contact(),
        Icon::LinkedIn => linkedin(),
        Icon::XTwitter => x_twitter(),
        Icon::Facebook => facebook(),
    }
}

/// Square SVG of `size` with every shape filled in `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}

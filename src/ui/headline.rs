// SPDX-License-Identifier: MPL-2.0
//! Cycling hero headline.
//!
//! Each slide is a run of segments; emphasized segments are drawn in the
//! accent color. Words wrap as a flow so long slides break between words.
//! While fading in, the block rises by [`motion::HEADLINE_RISE`] and
//! settles at full opacity.

use crate::rotator::{self, RichText, Rotator};
use crate::ui::design_tokens::{motion, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{font, Element, Font, Length, Padding};
use std::time::Instant;

/// Contextual data needed to render the headline.
pub struct ViewContext<'a> {
    pub rotator: &'a Rotator<RichText>,
    pub now: Instant,
    pub compact: bool,
}

/// Vertical offset of the headline for a given opacity.
///
/// Fully hidden content sits `HEADLINE_RISE` lower; fully visible content
/// is at rest.
#[must_use]
pub fn rise_offset(opacity: f32) -> f32 {
    motion::HEADLINE_RISE * (1.0 - opacity.clamp(0.0, 1.0))
}

/// Renders the current slide.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, rotator::Message> {
    let opacity = ctx.rotator.opacity(ctx.now);
    let size = if ctx.compact {
        typography::HEADLINE_COMPACT
    } else {
        typography::HEADLINE
    };
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::default()
    };

    let words = ctx
        .rotator
        .current()
        .display
        .iter()
        .flat_map(|segment| {
            let color = if segment.emphasized {
                palette::ACCENT
            } else {
                palette::WHITE
            };
            segment
                .text
                .split_whitespace()
                .map(move |word| (word, color))
        })
        .map(|(word, color)| {
            text(word)
                .size(size)
                .font(bold)
                .style(styles::text::faded(color, opacity))
                .into()
        });

    let flow = Row::with_children(words)
        .spacing(size * 0.3)
        .wrap()
        .vertical_spacing(spacing::XS);

    let offset = rise_offset(opacity);
    let slide = container(flow)
        .max_width(sizing::HEADLINE_MAX_WIDTH)
        .padding(Padding {
            top: offset,
            bottom: motion::HEADLINE_RISE - offset,
            ..Padding::ZERO
        });

    let content: Element<'_, rotator::Message> = if ctx.rotator.current().target.is_some() {
        button(slide)
            .padding(0)
            .style(styles::button::link(palette::WHITE))
            .on_press(rotator::Message::Activate)
            .into()
    } else {
        slide.into()
    };

    container(content).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_headline_sits_lower() {
        assert_eq!(rise_offset(0.0), motion::HEADLINE_RISE);
        assert_eq!(rise_offset(1.0), 0.0);
        assert!(rise_offset(0.5) > 0.0 && rise_offset(0.5) < motion::HEADLINE_RISE);
    }

    #[test]
    fn out_of_range_opacity_is_clamped() {
        assert_eq!(rise_offset(-1.0), motion::HEADLINE_RISE);
        assert_eq!(rise_offset(2.0), 0.0);
    }
}

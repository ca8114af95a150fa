// SPDX-License-Identifier: MPL-2.0
//! News ticker pill: label, fading title and previous/next arrows.

use crate::i18n::fluent::I18n;
use crate::rotator::{self, Direction, Rotator};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, tooltip, Row, Space};
use iced::{font, Element, Font, Length};
use std::time::Instant;

/// Contextual data needed to render the ticker.
pub struct ViewContext<'a> {
    pub rotator: &'a Rotator<String>,
    pub i18n: &'a I18n,
    pub now: Instant,
    pub compact: bool,
}

/// Localization key of the label for the current layout.
#[must_use]
pub fn label_key(compact: bool) -> &'static str {
    if compact {
        "news-label-short"
    } else {
        "news-label-long"
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, rotator::Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::default()
    };

    let label = text(ctx.i18n.tr(label_key(ctx.compact)))
        .size(typography::BODY)
        .font(bold)
        .color(palette::INK);

    let opacity = ctx.rotator.opacity(ctx.now);
    let title = button(
        text(ctx.rotator.current().display.as_str())
            .size(typography::BODY)
            .style(styles::text::faded(palette::INK, opacity))
            .wrapping(text::Wrapping::None),
    )
    .padding(0)
    .style(styles::button::link(palette::INK))
    .on_press(rotator::Message::Activate);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(container(title).width(Length::Fill).clip(true))
        .push(arrow(ctx.i18n, Direction::Previous))
        .push(arrow(ctx.i18n, Direction::Next))
        .push(Space::new().width(spacing::XXS));

    container(row)
        .height(sizing::TICKER_HEIGHT)
        .max_width(sizing::TICKER_MAX_WIDTH)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::ticker_pill)
        .into()
}

fn arrow<'a>(i18n: &I18n, direction: Direction) -> Element<'a, rotator::Message> {
    let (handle, key) = match direction {
        Direction::Previous => (icons::chevron_left(), "news-previous"),
        Direction::Next => (icons::chevron_right(), "news-next"),
    };

    let glyph = container(icons::tinted(handle, sizing::ICON_SM, palette::ACCENT))
        .center(sizing::TICKER_ARROW);

    tooltip(
        button(glyph)
            .padding(0)
            .style(styles::button::ticker_arrow)
            .on_press(rotator::Message::Navigate(direction)),
        text(i18n.tr(key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Brand logo linking to the home page.

use crate::content::{Link, HOME_LINK};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, svg, text, tooltip, Row, Svg};
use iced::{font, Element, Font};

/// Wordmark drawn next to the logo mark.
pub const WORDMARK: &str = "PROMETRIKA";

pub fn view<'a>(i18n: &I18n) -> Element<'a, Link> {
    let mark: Svg<'a> = svg(icons::logo())
        .width(sizing::LOGO_MARK)
        .height(sizing::LOGO_MARK);

    let wordmark = text(WORDMARK)
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::default()
        })
        .color(palette::WHITE);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(mark)
        .push(wordmark);

    tooltip(
        button(content)
            .padding(0)
            .style(styles::button::link(palette::WHITE))
            .on_press(Link::new(HOME_LINK)),
        text(i18n.tr_with_args("logo-label", &[("site", WORDMARK)])).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

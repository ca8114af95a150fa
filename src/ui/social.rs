// SPDX-License-Identifier: MPL-2.0
//! Row of social profile icons.

use crate::content::{Link, SocialLink};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, tooltip, Row};
use iced::Element;

pub fn view(links: &[SocialLink]) -> Element<'_, Link> {
    links
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, social| {
            let icon = button(icons::tinted(
                icons::for_icon(social.icon),
                sizing::ICON_MD,
                palette::WHITE,
            ))
            .padding(spacing::XXS)
            .style(styles::button::link(palette::WHITE))
            .on_press(social.link.clone());

            row.push(tooltip(
                icon,
                text(social.label).size(typography::CAPTION),
                tooltip::Position::Bottom,
            ))
        })
        .into()
}

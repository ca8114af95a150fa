// SPDX-License-Identifier: MPL-2.0
//! Vertical navigation bar.
//!
//! Entries are drawn top to bottom as an icon above its title. Pressing an
//! entry emits its [`Link`]; the parent decides how to open it.

use crate::content::{Link, NavEntry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

/// One entry: icon over a centered caption.
pub fn entry(entry: &NavEntry) -> Element<'_, Link> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(icons::tinted(
            icons::for_icon(entry.icon),
            sizing::ICON_LG,
            palette::WHITE,
        ))
        .push(
            text(entry.title)
                .size(typography::CAPTION)
                .align_x(Horizontal::Center),
        );

    button(content)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XS])
        .style(styles::button::nav_entry)
        .on_press(entry.link.clone())
        .into()
}

/// Full-height bar on the left edge of the wide layout.
pub fn view(entries: &[NavEntry]) -> Element<'_, Link> {
    let column = entries
        .iter()
        .fold(Column::new().width(Length::Fill), |column, item| {
            column.push(entry(item))
        });

    container(column)
        .width(sizing::NAV_WIDTH)
        .height(Length::Fill)
        .padding([spacing::LG, 0.0])
        .style(styles::container::nav_bar)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Compact-layout menu.
//!
//! Below the width breakpoint the navigation bar collapses into a single
//! button. Opening it shows a panel covering the hero with the navigation
//! entries and social row; the parent tears the hero rotators down while the
//! panel is open.

use crate::content::{Link, NavEntry, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{icons, navigation, social};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, tooltip, Column, Row, Space};
use iced::{Element, Length};

/// Contextual data needed to render the menu panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [NavEntry],
    pub social: &'a [SocialLink],
}

/// Messages emitted by the menu.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    Open(Link),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Opened,
    Closed,
    OpenLink(Link),
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::Toggle => {
            *menu_open = !*menu_open;
            if *menu_open {
                Event::Opened
            } else {
                Event::Closed
            }
        }
        Message::Close => {
            if *menu_open {
                *menu_open = false;
                Event::Closed
            } else {
                Event::None
            }
        }
        Message::Open(link) => {
            *menu_open = false;
            Event::OpenLink(link)
        }
    }
}

/// Hamburger (or close) button.
pub fn view_button<'a>(i18n: &I18n, menu_open: bool) -> Element<'a, Message> {
    let (handle, key) = if menu_open {
        (icons::close(), "menu-close")
    } else {
        (icons::menu(), "menu-open")
    };

    let glyph = container(icons::tinted(handle, sizing::ICON_MD, palette::WHITE))
        .center(sizing::MENU_BUTTON);

    tooltip(
        button(glyph)
            .padding(0)
            .style(styles::button::nav_entry)
            .on_press(Message::Toggle),
        text(i18n.tr(key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

/// Panel listing every navigation entry and the social row.
pub fn view_panel(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(view_button(ctx.i18n, true));

    let entries = ctx
        .entries
        .iter()
        .fold(Column::new().width(Length::Fill), |column, entry| {
            column.push(navigation::entry(entry).map(Message::Open))
        });

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(entries)
        .push(social::view(ctx.social).map(Message::Open));

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::menu_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_open_and_close() {
        let mut open = false;
        assert_eq!(update(Message::Toggle, &mut open), Event::Opened);
        assert!(open);
        assert_eq!(update(Message::Toggle, &mut open), Event::Closed);
        assert!(!open);
    }

    #[test]
    fn close_when_already_closed_is_silent() {
        let mut open = false;
        assert_eq!(update(Message::Close, &mut open), Event::None);
    }

    #[test]
    fn opening_a_link_closes_the_panel() {
        let mut open = true;
        let link = Link::new("/about/");
        assert_eq!(
            update(Message::Open(link.clone()), &mut open),
            Event::OpenLink(link)
        );
        assert!(!open);
    }
}

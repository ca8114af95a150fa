// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The hero is a stack: the background video fills the window and the
//! chrome (navigation, logo, social row, headline, ticker and video toggle)
//! is layered on top. Below the width breakpoint the navigation bar becomes a
//! menu button, and the open menu panel replaces the hero content.

use super::Message;
use crate::background::Background;
use crate::content::{NavEntry, SocialLink};
use crate::i18n::fluent::I18n;
use crate::rotator::{RichText, Rotator};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{
    headline, logo, menu, navigation, news_ticker, social, video_overlay, video_toggle,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, Column, Row, Space, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub headline: &'a Rotator<RichText>,
    pub ticker: &'a Rotator<String>,
    pub background: &'a Background,
    pub navigation: &'a [NavEntry],
    pub social: &'a [SocialLink],
    pub compact: bool,
    pub menu_open: bool,
    pub now: Instant,
}

/// Renders the hero for the current layout.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let video = video_overlay::view(ctx.background, ctx.i18n);

    if ctx.compact && ctx.menu_open {
        let panel = menu::view_panel(menu::ViewContext {
            i18n: ctx.i18n,
            entries: ctx.navigation,
            social: ctx.social,
        })
        .map(Message::Menu);

        return Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(video)
            .push(panel)
            .into();
    }

    let toggle = container(
        video_toggle::view(ctx.background.playback(), ctx.i18n).map(Message::Background),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom);

    let content = view_content(&ctx);
    let chrome: Element<'_, Message> = if ctx.compact {
        content
    } else {
        Row::new()
            .height(Length::Fill)
            .push(navigation::view(ctx.navigation).map(Message::OpenLink))
            .push(content)
            .into()
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(video)
        .push(chrome)
        .push(toggle)
        .into()
}

/// Top bar, headline and ticker.
fn view_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let trailing: Element<'a, Message> = if ctx.compact {
        menu::view_button(ctx.i18n, false).map(Message::Menu)
    } else {
        social::view(ctx.social).map(Message::OpenLink)
    };

    let top_bar = Row::new()
        .height(sizing::TOP_BAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(logo::view(ctx.i18n).map(Message::OpenLink))
        .push(Space::new().width(Length::Fill))
        .push(trailing);

    let headline = headline::view(headline::ViewContext {
        rotator: ctx.headline,
        now: ctx.now,
        compact: ctx.compact,
    })
    .map(Message::Headline);

    let ticker = news_ticker::view(news_ticker::ViewContext {
        rotator: ctx.ticker,
        i18n: ctx.i18n,
        now: ctx.now,
        compact: ctx.compact,
    })
    .map(Message::Ticker);

    let bottom_gap = if ctx.compact {
        spacing::XXL + sizing::VIDEO_TOGGLE
    } else {
        spacing::XXL
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, spacing::XL])
        .push(top_bar)
        .push(Space::new().height(Length::Fill))
        .push(headline)
        .push(Space::new().height(spacing::XL))
        .push(ticker)
        .push(Space::new().height(bottom_gap))
        .into()
}

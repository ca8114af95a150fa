// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::config::COMPACT_WIDTH_BREAKPOINT;
use super::Message;
use crate::background::{self, Background};
use crate::content::Link;
use crate::rotator::{Effect, RichText, Rotator};
use crate::ui::menu::{self, Event as MenuEvent};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub headline: &'a mut Rotator<RichText>,
    pub ticker: &'a mut Rotator<String>,
    pub background: &'a mut Background,
    pub menu_open: &'a mut bool,
    pub window_width: &'a mut f32,
    pub now: &'a mut Instant,
    pub base_url: &'a str,
}

/// Routes a top-level message to its handler.
///
/// The clock used for drawing fades is refreshed on every message, so a
/// visibility flip and the frame that follows it share one time base.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    *ctx.now = Instant::now();

    match message {
        Message::Headline(message) => {
            let effect = ctx.headline.handle(message);
            handle_rotator_effect(ctx, effect)
        }
        Message::Ticker(message) => {
            let effect = ctx.ticker.handle(message);
            handle_rotator_effect(ctx, effect)
        }
        Message::Background(message) => {
            handle_background_message(ctx.background, message);
            Task::none()
        }
        Message::Menu(message) => handle_menu_message(ctx, message),
        Message::OpenLink(link) => {
            open_link(&link, ctx.base_url);
            Task::none()
        }
        Message::Resized(width) => {
            *ctx.window_width = width;
            // Widening past the breakpoint hides the panel.
            if width >= COMPACT_WIDTH_BREAKPOINT {
                return handle_menu_message(ctx, menu::Message::Close);
            }
            Task::none()
        }
        Message::Frame(_) => Task::none(),
    }
}

fn handle_rotator_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::OpenLink(link) => {
            open_link(&link, ctx.base_url);
            Task::none()
        }
    }
}

fn handle_background_message(background: &mut Background, message: background::Message) {
    background.update(message);
}

/// Applies a menu message; the rotators are unmounted while the panel
/// covers them and remounted fresh once it closes.
fn handle_menu_message(ctx: &mut UpdateContext<'_>, message: menu::Message) -> Task<Message> {
    match menu::update(message, ctx.menu_open) {
        MenuEvent::None => {}
        MenuEvent::Opened => {
            ctx.headline.unmount();
            ctx.ticker.unmount();
        }
        MenuEvent::Closed => remount_rotators(ctx),
        MenuEvent::OpenLink(link) => {
            remount_rotators(ctx);
            open_link(&link, ctx.base_url);
        }
    }
    Task::none()
}

fn remount_rotators(ctx: &mut UpdateContext<'_>) {
    ctx.headline.mount();
    ctx.ticker.mount();
}

/// Opens `link` in the system browser.
///
/// Placeholders (`#`) resolve to nothing and are skipped. Failures are
/// logged; there is nothing else to do about them.
pub fn open_link(link: &Link, base_url: &str) -> Option<String> {
    let Some(url) = link.resolve(base_url) else {
        tracing::debug!(href = link.href(), "link has no destination");
        return None;
    };

    match open::that_detached(&url) {
        Ok(()) => tracing::info!(%url, "opened link"),
        Err(err) => tracing::warn!(%url, error = %err, "failed to open link"),
    }
    Some(url)
}

/// Whether any mounted rotator is mid-fade at `now`.
#[must_use]
pub fn is_animating(
    headline: &Rotator<RichText>,
    ticker: &Rotator<String>,
    now: Instant,
) -> bool {
    headline.is_animating(now) || ticker.is_animating(now)
}

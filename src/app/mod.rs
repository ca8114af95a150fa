// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the hero components.
//!
//! The `App` struct wires together the rotators, the background video,
//! localization and the compact menu, and translates messages into side
//! effects like opening links. Layout policy (window size, compact
//! breakpoint) lives here next to the update loop.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::background::{Background, SourceList};
use crate::content::{HeroContent, NavEntry, SocialLink};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::rotator::{RichText, Rotator, RotatorTimings, Variant};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    headline: Rotator<RichText>,
    ticker: Rotator<String>,
    background: Background,
    navigation: Vec<NavEntry>,
    social: Vec<SocialLink>,
    window_width: f32,
    /// Whether the compact menu panel is open.
    menu_open: bool,
    /// Clock the fades are drawn against.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("headline", &self.headline.state())
            .field("ticker", &self.ticker.state())
            .field("video", self.background.load_state())
            .field("window_width", &self.window_width)
            .field("menu_open", &self.menu_open)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let content = HeroContent::builtin()?;

    // iced 0.14 requires the boot function to be `Fn`.
    let boot = move || App::new(flags.clone(), content.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Loads the configuration and localization, then builds the hero.
    fn new(flags: Flags, content: HeroContent) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, config, content);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    fn with_config(flags: Flags, config: Config, content: HeroContent) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let headline = Rotator::new(
            Variant::Headline,
            content.headlines,
            config.headline.timings(RotatorTimings::headline()),
        );
        let ticker = Rotator::new(
            Variant::Ticker,
            content.news,
            config.ticker.timings(RotatorTimings::ticker()),
        );

        let local_video = flags.video.unwrap_or_else(|| config.video.source());
        let sources = SourceList::new(local_video, config.video.fallback_url());
        let background = Background::new(sources, config.video.autoplay());

        tracing::info!(
            locale = %i18n.current_locale(),
            headlines = headline.items().len(),
            news = ticker.items().len(),
            "hero ready"
        );

        Self {
            i18n,
            config,
            headline,
            ticker,
            background,
            navigation: content.navigation,
            social: content.social,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            menu_open: false,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Whether the window is narrower than the compact breakpoint.
    fn is_compact(&self) -> bool {
        self.window_width < config::COMPACT_WIDTH_BREAKPOINT
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(update::is_animating(
            &self.headline,
            &self.ticker,
            self.now,
        ));
        let headline_sub = self.headline.subscription().map(Message::Headline);
        let ticker_sub = self.ticker.subscription().map(Message::Ticker);
        let video_sub = self.background.subscription().map(Message::Background);

        Subscription::batch([event_sub, frame_sub, headline_sub, ticker_sub, video_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            headline: &mut self.headline,
            ticker: &mut self.ticker,
            background: &mut self.background,
            menu_open: &mut self.menu_open,
            window_width: &mut self.window_width,
            now: &mut self.now,
            base_url: self.config.site.base_url(),
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            headline: &self.headline,
            ticker: &self.ticker,
            background: &self.background,
            navigation: &self.navigation,
            social: &self.social,
            compact: self.is_compact(),
            menu_open: self.menu_open,
            now: self.now,
        })
    }
}

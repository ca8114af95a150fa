// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! `view` borrows the state it draws and emits its own message type, which
//! the application maps into its top-level message.
//!
//! # Hero components
//!
//! - [`headline`] - Cycling headline with accent segments
//! - [`news_ticker`] - News pill with manual navigation
//! - [`navigation`] - Vertical navigation bar
//! - [`menu`] - Compact-layout menu button and panel
//! - [`social`] - Social profile icons
//! - [`logo`] - Brand logo
//! - [`video_overlay`] - Background video with dim, tint and status overlays
//! - [`video_toggle`] - Play/pause button
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod headline;
pub mod icons;
pub mod logo;
pub mod menu;
pub mod navigation;
pub mod news_ticker;
pub mod social;
pub mod styles;
pub mod video_overlay;
pub mod video_toggle;
pub mod widgets;

// SPDX-License-Identifier: MPL-2.0
//! `iced_hero` is a full-window landing hero built with the Iced GUI
//! framework.
//!
//! It cycles headlines and news items with cross-fades over a looping, muted
//! background video, and links every navigation entry to the site it
//! advertises.

#![doc(html_root_url = "https://docs.rs/iced_hero/0.1.0")]

pub mod app;
pub mod background;
pub mod content;
pub mod error;
pub mod i18n;
pub mod rotator;
pub mod ui;

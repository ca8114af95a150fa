// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed to the hero components;
//! timers come from the rotators, the background video and the frame clock.

use super::Message;
use crate::background;
use crate::rotator::{self, Direction};
use crate::ui::menu;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

/// Keyboard shortcuts and window size changes.
///
/// - Space toggles the background video
/// - Left/Right step the news ticker
/// - Escape closes the compact menu
///
/// Keys already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size))
        | event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::Resized(size.width))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => shortcut(&key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Message bound to a key, if any.
pub fn shortcut(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Space) => Some(Message::Background(
            background::Message::TogglePlayback,
        )),
        Key::Named(Named::ArrowLeft) => Some(Message::Ticker(rotator::Message::Navigate(
            Direction::Previous,
        ))),
        Key::Named(Named::ArrowRight) => {
            Some(Message::Ticker(rotator::Message::Navigate(Direction::Next)))
        }
        Key::Named(Named::Escape) => Some(Message::Menu(menu::Message::Close)),
        _ => None,
    }
}

/// Redraw on every frame while a fade is in progress.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_video() {
        assert!(matches!(
            shortcut(&Key::Named(Named::Space)),
            Some(Message::Background(background::Message::TogglePlayback))
        ));
    }

    #[test]
    fn arrows_step_the_ticker() {
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowLeft)),
            Some(Message::Ticker(rotator::Message::Navigate(
                Direction::Previous
            )))
        ));
        assert!(matches!(
            shortcut(&Key::Named(Named::ArrowRight)),
            Some(Message::Ticker(rotator::Message::Navigate(Direction::Next)))
        ));
    }

    #[test]
    fn escape_closes_menu() {
        assert!(matches!(
            shortcut(&Key::Named(Named::Escape)),
            Some(Message::Menu(menu::Message::Close))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(shortcut(&Key::Character("a".into())).is_none());
    }
}

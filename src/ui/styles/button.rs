// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navigation bar entry: transparent, darkens on hover.
pub fn nav_entry(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::NAV_HOVER))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round ink button with accent glyph, dimmed on hover.
pub fn ticker_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::HOVER_DIM,
        _ => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::INK
        })),
        text_color: palette::ACCENT,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button around a link or icon, dimmed on hover.
pub fn link(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::HOVER_DIM,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: None,
            text_color: Color {
                a: alpha,
                ..text_color
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent play/pause toggle over the video.
pub fn video_toggle(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::LG,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entry_darkens_on_hover() {
        let theme = Theme::Dark;
        assert_eq!(nav_entry(&theme, button::Status::Active).background, None);
        assert_eq!(
            nav_entry(&theme, button::Status::Hovered).background,
            Some(Background::Color(palette::NAV_HOVER))
        );
    }

    #[test]
    fn ticker_arrow_dims_on_hover() {
        let theme = Theme::Dark;
        let normal = ticker_arrow(&theme, button::Status::Active);
        let hover = ticker_arrow(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
        assert_eq!(normal.text_color, palette::ACCENT);
    }

    #[test]
    fn link_keeps_requested_color() {
        let style_fn = link(palette::INK);
        let style = style_fn(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, palette::INK);
        assert!(style.background.is_none());
    }

    #[test]
    fn video_toggle_strengthens_on_hover() {
        let theme = Theme::Dark;
        assert_ne!(
            video_toggle(&theme, button::Status::Active).background,
            video_toggle(&theme, button::Status::Hovered).background
        );
    }
}

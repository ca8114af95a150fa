// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

/// Vertical navigation bar.
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAV)),
        ..Default::default()
    }
}

/// Accent pill behind the news ticker.
pub fn ticker_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT)),
        text_color: Some(palette::INK),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Uniform darkening over the video.
pub fn video_dim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Left-to-right ink tint, strongest behind the headline.
pub fn video_tint(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(FRAC_PI_2))
        .add_stop(
            0.0,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::INK
            },
        )
        .add_stop(
            0.6,
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::INK
            },
        )
        .add_stop(
            1.0,
            Color {
                a: opacity::TRANSPARENT,
                ..palette::INK
            },
        );

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..Default::default()
    }
}

/// Solid backdrop shown before the first frame or when loading failed.
pub fn video_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Card holding the video error message.
pub fn error_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Full-window menu panel of the compact layout.
pub fn menu_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAV)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_pill_uses_accent_and_ink() {
        let style = ticker_pill(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::ACCENT)));
        assert_eq!(style.text_color, Some(palette::INK));
    }

    #[test]
    fn video_tint_is_a_gradient() {
        assert!(matches!(
            video_tint(&Theme::Dark).background,
            Some(Background::Gradient(_))
        ));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use iced::widget::text;
use iced::{Color, Theme};

/// Text in `color`, scaled to `alpha` for fades.
pub fn faded(color: Color, alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        }),
    }
}

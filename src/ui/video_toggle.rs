// SPDX-License-Identifier: MPL-2.0
//! Play/pause button for the background video.

use crate::background::{self, PlaybackState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip};
use iced::Element;

/// Localization key describing what pressing the toggle does.
#[must_use]
pub fn label_key(playback: PlaybackState) -> &'static str {
    if playback.is_playing() {
        "video-toggle-pause"
    } else {
        "video-toggle-play"
    }
}

pub fn view<'a>(playback: PlaybackState, i18n: &I18n) -> Element<'a, background::Message> {
    let handle = if playback.is_playing() {
        icons::pause()
    } else {
        icons::play()
    };

    let glyph = container(icons::tinted(handle, sizing::ICON_MD, palette::WHITE))
        .center(sizing::VIDEO_TOGGLE);

    tooltip(
        button(glyph)
            .padding(0)
            .style(styles::button::video_toggle)
            .on_press(background::Message::TogglePlayback),
        text(i18n.tr(label_key(playback))).size(typography::CAPTION),
        tooltip::Position::Left,
    )
    .into()
}

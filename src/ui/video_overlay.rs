// SPDX-License-Identifier: MPL-2.0
//! Background video layer with its overlays.
//!
//! The stack is, bottom to top: the latest decoded frame (or a solid
//! placeholder), a uniform dim, a side tint, and then either nothing, a
//! loading spinner or an error card depending on the load state.

use crate::background::{Background, LoadState};
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{container, image, text, Column, Space, Stack};
use iced::{ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(background: &'a Background, i18n: &I18n) -> Element<'a, Message> {
    let base: Element<'a, Message> = match background.frame() {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => fill(Space::new()).style(styles::container::video_placeholder).into(),
    };

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(fill(Space::new()).style(styles::container::video_dim))
        .push(fill(Space::new()).style(styles::container::video_tint));

    match background.load_state() {
        LoadState::Loading => {
            stack = stack.push(loading(background.spinner_rotation(), i18n));
        }
        LoadState::Failed(err) => {
            stack = stack.push(error_card(err, i18n));
        }
        LoadState::Ready => {}
    }

    stack.into()
}

fn fill<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> container::Container<'a, Message> {
    container(content).width(Length::Fill).height(Length::Fill)
}

fn loading<'a, Message: 'a>(rotation: f32, i18n: &I18n) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(AnimatedSpinner::new(palette::ACCENT, rotation).into_element())
        .push(
            text(i18n.tr("video-loading"))
                .size(typography::BODY)
                .color(palette::WHITE),
        );

    fill(column).center(Length::Fill).into()
}

fn error_card<'a, Message: 'a>(err: &VideoError, i18n: &I18n) -> Element<'a, Message> {
    let card = Column::new()
        .spacing(spacing::XS)
        .max_width(420.0)
        .push(
            text(i18n.tr("video-error-title"))
                .size(typography::BODY_LG)
                .color(palette::ERROR_500),
        )
        .push(text(err.message()).size(typography::BODY))
        .push(
            text(i18n.tr("video-error-hint"))
                .size(typography::CAPTION)
                .color(palette::WHITE),
        );

    fill(
        container(card)
            .padding(spacing::MD)
            .style(styles::container::error_card),
    )
    .center(Length::Fill)
    .into()
}

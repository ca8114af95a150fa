// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a Canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Sweep of the moving arc.
const ARC_SWEEP: f32 = PI * 1.5;

const STROKE_WIDTH: f32 = 4.0;

const ARC_SEGMENTS: u16 = 36;

/// Ring with a rotating arc; the caller advances `rotation` each tick.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Redrawn every tick, so no cache.
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.2,
                    ..self.color
                }),
        );

        // Start at 12 o'clock.
        let start_angle = self.rotation - PI / 2.0;
        let mut arc = canvas::path::Builder::new();
        arc.move_to(Self::arc_point(center, radius, start_angle));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            arc.line_to(Self::arc_point(center, radius, start_angle + ARC_SWEEP * t));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_point_starts_at_top() {
        let point = AnimatedSpinner::arc_point(Point::new(10.0, 10.0), 5.0, -PI / 2.0);
        assert!((point.x - 10.0).abs() < 1e-4);
        assert!((point.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn size_overrides_default() {
        let spinner = AnimatedSpinner::new(Color::WHITE, 0.0).size(24.0);
        assert_eq!(spinner.size, 24.0);
    }
}

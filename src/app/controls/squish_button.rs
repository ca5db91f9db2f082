// SPDX-License-Identifier: MPL-2.0

//! Squish button widget rendering

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::squish::{ButtonSnapshot, SquishButton, Transition};
use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::widget;
use std::time::Instant;

/// Pointer activity over the button area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed,
    Released,
    /// Pointer left the area, possibly with the button still held
    Exited,
}

/// Highlight the button while pressed. Leaving the area counts as a release,
/// since the release itself is only reported over the button.
pub fn apply_pointer_event(
    button: &mut SquishButton,
    event: PointerEvent,
    now: Instant,
) -> Transition {
    let highlighted = matches!(event, PointerEvent::Pressed);
    button.set_highlighted(highlighted, now)
}

/// Corner radius of a rounded rect, limited to half its shorter side
fn clamped_radius(radius: f32, width: f32, height: f32) -> f32 {
    radius.min(width.min(height) / 2.0).max(0.0)
}

impl AppModel {
    /// Build the squish button widget
    ///
    /// Layers, back to front:
    /// - Outer border on the button's own frame
    /// - Inner filled shape, scaled about its center by the presented scale
    /// - Optional title, hidden while pressed
    pub fn build_squish_button(&self) -> Element<'_, Message> {
        let snapshot: ButtonSnapshot = self.button.snapshot(Instant::now());
        let bounds = snapshot.bounds;
        let inner = snapshot.inner_bounds;

        let fill_color: Color = snapshot.fill_color.into();
        let inner_radius = clamped_radius(
            snapshot.inner_path.corner_radius * snapshot.scale.x.min(snapshot.scale.y),
            inner.width,
            inner.height,
        );

        let inner_shape = widget::container(widget::Space::new(
            Length::Fixed(inner.width),
            Length::Fixed(inner.height),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(fill_color)),
            border: cosmic::iced::Border {
                radius: inner_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let border = snapshot.border;
        let border_color: Color = border.color.into();
        let border_radius = clamped_radius(border.corner_radius, bounds.width, bounds.height);

        // Inset is uniform, so the inner shape stays centered in the frame
        let outer = widget::container(inner_shape)
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(bounds.height))
            .center_x(Length::Fixed(bounds.width))
            .center_y(Length::Fixed(bounds.height))
            .style(move |_theme| widget::container::Style {
                border: cosmic::iced::Border {
                    color: border_color,
                    width: border.width,
                    radius: border_radius.into(),
                },
                ..Default::default()
            });

        let content: Element<'_, Message> = match self.button.title() {
            Some(title) => {
                let title_color: Color = snapshot.title_color.into();
                let label = widget::container(widget::text(title).size(ui::TITLE_TEXT_SIZE))
                    .center_x(Length::Fixed(bounds.width))
                    .center_y(Length::Fixed(bounds.height))
                    .style(move |_theme| widget::container::Style {
                        text_color: Some(title_color),
                        ..Default::default()
                    });
                cosmic::iced::widget::stack![outer, label].into()
            }
            None => outer.into(),
        };

        cosmic::iced::widget::mouse_area(content)
            .on_press(Message::ButtonPointer(PointerEvent::Pressed))
            .on_release(Message::ButtonPointer(PointerEvent::Released))
            .on_exit(Message::ButtonPointer(PointerEvent::Exited))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_radius_limited_to_half_short_side() {
        // 80x80 button with inset 5: radius 40 on a 70x70 shape
        assert_eq!(clamped_radius(40.0, 70.0, 70.0), 35.0);
        assert_eq!(clamped_radius(10.0, 70.0, 70.0), 10.0);
        assert_eq!(clamped_radius(30.0, 0.0, 40.0), 0.0);
    }

    #[test]
    fn test_leaving_while_pressed_releases() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        apply_pointer_event(&mut button, PointerEvent::Pressed, now);
        assert!(button.is_highlighted());

        let transition = apply_pointer_event(&mut button, PointerEvent::Exited, now);
        assert!(!button.is_highlighted());
        assert_eq!(
            transition.target_scale(),
            Some(crate::geometry::Scale::IDENTITY)
        );

        // The release that follows outside the area changes nothing
        let transition = apply_pointer_event(&mut button, PointerEvent::Released, now);
        assert!(transition.is_none());
    }

    #[test]
    fn test_hover_exit_without_press_is_noop() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        let transition = apply_pointer_event(&mut button, PointerEvent::Exited, now);
        assert!(transition.is_none());
        assert!(!button.is_highlighted());
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! The squish button centered on a dark backdrop, with size and inset
//! sliders and a mode toggle underneath.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::squish::ButtonMode;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let button = self.build_squish_button();

        // Fixed-size wrapper so the controls don't shift while resizing the button
        let button_wrapper = widget::container(button)
            .width(Length::Fill)
            .height(Length::Fixed(ui::MAX_BUTTON_SIZE))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(ui::MAX_BUTTON_SIZE));

        let size = self.button.bounds().width;
        let size_row = widget::row()
            .push(widget::text::body("Size").width(Length::Fixed(ui::LABEL_WIDTH)))
            .push(
                widget::slider(
                    ui::MIN_BUTTON_SIZE..=ui::MAX_BUTTON_SIZE,
                    size.clamp(ui::MIN_BUTTON_SIZE, ui::MAX_BUTTON_SIZE),
                    Message::SetButtonSize,
                )
                .width(Length::Fixed(ui::SIZE_SLIDER_WIDTH)),
            )
            .push(widget::text::body(format!("{:.0}", size)))
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        let inset = self.button.inner_inset();
        let max_inset = (self.button.bounds().height / 2.0).max(1.0);
        let inset_row = widget::row()
            .push(widget::text::body("Inset").width(Length::Fixed(ui::LABEL_WIDTH)))
            .push(
                widget::slider(0.0..=max_inset, inset.min(max_inset), Message::SetInnerInset)
                    .width(Length::Fixed(ui::SIZE_SLIDER_WIDTH)),
            )
            .push(widget::text::body(format!("{:.0}", inset)))
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        let mode_label = match self.button.mode() {
            ButtonMode::Camera => "Switch to video",
            ButtonMode::Video => "Switch to camera",
        };
        let mode_button = widget::button::standard(mode_label).on_press(Message::ToggleMode);

        let controls = widget::column()
            .push(size_row)
            .push(inset_row)
            .push(mode_button)
            .spacing(spacing.space_s)
            .align_x(Alignment::Center);

        widget::container(
            widget::column()
                .push(button_wrapper)
                .push(controls)
                .spacing(spacing.space_m)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            text_color: Some(Color::WHITE),
            ..Default::default()
        })
        .into()
    }
}

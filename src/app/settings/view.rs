// SPDX-License-Identifier: MPL-2.0

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::AppTheme;
use crate::constants::ui;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows the theme selection and the button's press depth.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let current_theme_index = AppTheme::ALL
            .iter()
            .position(|t| *t == self.config.app_theme());

        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            current_theme_index,
            Message::SetAppTheme,
        );

        let scaling = self.button.scaling();
        let max_scaling = (self.button.bounds().width / 2.0).max(1.0);
        let scaling_row = widget::row()
            .push(widget::text::body("Depth").width(Length::Fixed(ui::LABEL_WIDTH)))
            .push(
                widget::slider(0.0..=max_scaling, scaling.min(max_scaling), Message::SetScaling)
                    .width(Length::Fixed(ui::SIZE_SLIDER_WIDTH)),
            )
            .push(widget::text::body(format!("{:.0} px", scaling)))
            .spacing(spacing.space_xs)
            .align_y(cosmic::iced::Alignment::Center);

        let settings_column: Element<'_, Message> = widget::column()
            .push(widget::text("Appearance").size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text("Press").size(16).font(cosmic::font::bold()))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(scaling_row)
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title("Settings")
    }
}

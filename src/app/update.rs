// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! Routes messages to the button's explicit setters and keeps the persisted
//! configuration in sync with user changes.

use crate::app::controls::squish_button::apply_pointer_event;
use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::{AppTheme, Config};
use crate::geometry::Rect;
use crate::squish::{SquishButton, Transition};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use std::time::Instant;
use tracing::{debug, error, info};

impl AppModel {
    /// Main message handler
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::ButtonPointer(event) => {
                let transition = apply_pointer_event(&mut self.button, event, Instant::now());
                self.track_transition(transition)
            }
            Message::ToggleMode => {
                let mode = self.button.mode().toggled();
                info!(%mode, "Switching button mode");
                let transition = self.button.set_mode(mode, Instant::now());
                self.track_transition(transition)
            }
            Message::SetButtonSize(size) => self.handle_set_button_size(size),
            Message::SetInnerInset(inset) => {
                self.button.set_inner_inset(inset);
                let inset = self.button.inner_inset();
                self.config.update_button(|button| button.inner_inset = inset);
                self.save_config();
                Task::none()
            }
            Message::SetScaling(scaling) => {
                self.button.set_scaling(scaling);
                let scaling = self.button.scaling();
                self.config.update_button(|button| button.scaling = scaling);
                self.save_config();
                Task::none()
            }
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::Tick => {
                self.animating = self.button.tick(Instant::now());
                Task::none()
            }
            Message::UpdateConfig(config) => self.handle_update_config(config),
        }
    }

    /// Record a started transition and keep the frame ticker running while it plays
    fn track_transition(&mut self, transition: Transition) -> Task<cosmic::Action<Message>> {
        debug!(?transition, "Button transition");
        if !transition.is_none() {
            self.animating = self.button.is_animating(Instant::now());
        }
        Task::none()
    }

    fn handle_set_button_size(&mut self, size: f32) -> Task<cosmic::Action<Message>> {
        let transition = self
            .button
            .set_frame(Rect::from_size(size, size), Instant::now());
        self.config.update_button(|button| button.size = size);
        self.save_config();
        self.track_transition(transition)
    }

    fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.set_app_theme(app_theme);
        self.save_config();

        cosmic::command::set_theme(app_theme.theme())
    }

    fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let change = self.config.replace_stored(config);
        if change.button {
            // Edited outside the app: rebuild from the new description
            let now = Instant::now();
            let description = self.config.button();
            self.button = SquishButton::from_config(description, now);
            self.button.set_mode(description.mode, now);
            self.animating = self.button.is_animating(now);
        }

        if change.theme {
            cosmic::command::set_theme(self.config.app_theme().theme())
        } else {
            Task::none()
        }
    }

    fn save_config(&self) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.stored().write_entry(handler)
        {
            error!(?err, "Failed to save settings");
        }
    }
}

// SPDX-License-Identifier: MPL-2.0

//! Host application showing a single squish button
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, Flags)
//! - `controls`: Squish button rendering
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling

mod controls;
mod settings;
mod state;
mod update;
mod view;

use crate::config::{AppTheme, Config, LayeredConfig};
use crate::constants::FRAME_INTERVAL;
use crate::squish::SquishButton;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use controls::squish_button::PointerEvent;
pub use state::{AppModel, ContextPage, Flags, Message};
use std::time::Instant;
use tracing::{error, info};

const REPOSITORY: &str = "https://github.com/BalestraPatrick/SquishButton";

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.balestrapatrick.SquishButton";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name("Squish Button")
            .version(env!("CARGO_PKG_VERSION"))
            .links([("Repository", REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, stored) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        if flags.button.is_some() {
            info!("Using button description from command line");
        }
        let config = LayeredConfig::new(stored, flags.button);

        let now = Instant::now();
        let mut button = SquishButton::from_config(config.button(), now);
        button.set_mode(flags.mode.unwrap_or(config.button().mode), now);
        let animating = button.is_animating(now);

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            button,
            animating,
            theme_dropdown_options: AppTheme::ALL
                .iter()
                .map(|t| t.display_name().to_string())
                .collect(),
        };

        let theme_task = cosmic::command::set_theme(app.config.app_theme().theme());
        (app, theme_task)
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::futures::SinkExt;

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Frame ticker only exists while the button is animating
        let tick_sub = if self.animating {
            Subscription::run_with_id(
                "squish_ticker",
                cosmic::iced::stream::channel(1, move |mut output| async move {
                    loop {
                        tokio::time::sleep(FRAME_INTERVAL).await;
                        if output.send(Message::Tick).await.is_err() {
                            break;
                        }
                    }
                }),
            )
        } else {
            Subscription::none()
        };

        Subscription::batch([config_sub, tick_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::app::controls::squish_button::PointerEvent;
use crate::config::{ButtonConfig, Config, LayeredConfig};
use crate::squish::{ButtonMode, SquishButton};
use cosmic::cosmic_config;
use cosmic::widget::about::About;

/// Startup options passed from the command line
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Button description overriding the stored one
    pub button: Option<ButtonConfig>,
    /// Mode to switch to once the button is set up
    pub mode: Option<ButtonMode>,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Persisted configuration plus the command-line button override
    pub config: LayeredConfig,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// The button shown in the window
    pub button: SquishButton,
    /// Whether the frame ticker should run
    pub animating: bool,
    /// Dropdown labels for the theme selector
    pub theme_dropdown_options: Vec<String>,
}

/// Context drawer pages
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open a URL from the about page
    LaunchUrl(String),
    /// Toggle a context drawer page
    ToggleContextPage(ContextPage),
    /// Pointer pressed, released or left the button area
    ButtonPointer(PointerEvent),
    /// Switch between camera and video mode
    ToggleMode,
    /// Resize the (square) button frame
    SetButtonSize(f32),
    /// Change the gap between border and inner shape
    SetInnerInset(f32),
    /// Change how many pixels the inner shape shrinks by
    SetScaling(f32),
    /// Select the application theme by dropdown index
    SetAppTheme(usize),
    /// Animation frame
    Tick,
    /// Configuration changed on disk
    UpdateConfig(Config),
}

// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, ValueEnum};
use squish_button::app::{AppModel, Flags};
use squish_button::config::ButtonConfig;
use squish_button::squish::ButtonMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squish-button")]
#[command(about = "Circular capture button with press and mode animations")]
#[command(version)]
struct Cli {
    /// Button description (JSON) to use instead of the stored settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Button edge length, overrides the description
    #[arg(short, long)]
    size: Option<f32>,

    /// Mode to switch to after startup
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Camera,
    Video,
}

impl From<ModeArg> for ButtonMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Camera => ButtonMode::Camera,
            ModeArg::Video => ButtonMode::Video,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=squish_button=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut button = match &cli.config {
        Some(path) => Some(ButtonConfig::load(path)?),
        None => None,
    };
    if let Some(size) = cli.size {
        let mut description = button.unwrap_or_default();
        description.size = size;
        description.validate()?;
        button = Some(description);
    }

    let flags = Flags {
        button,
        mode: cli.mode.map(ButtonMode::from),
    };

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(320.0)
            .min_height(420.0),
    );

    cosmic::app::run::<AppModel>(settings, flags)?;

    Ok(())
}

// SPDX-License-Identifier: MPL-2.0

//! Squish Button - a circular capture button for camera interfaces
//!
//! The button draws a white border around a filled rounded inner shape. The
//! inner shape shrinks while the button is held down and fades between white
//! and red when switching between camera and video mode.
//!
//! # Architecture
//!
//! - [`squish`]: Button state machine and inner shape layer
//! - [`animation`]: Timed property animations and easing curves
//! - [`geometry`]: Rectangles, rounded paths and scale transforms
//! - [`config`]: Persisted button description and host settings
//! - [`app`]: COSMIC host application showing one button
//!
//! # Example
//!
//! ```ignore
//! let now = Instant::now();
//! let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
//! button.set_highlighted(true, now); // inner shape scales to 1 - 20/70
//! button.set_mode(ButtonMode::Video, now); // fades to red over 0.3s
//! ```

pub mod animation;
pub mod app;
pub mod color;
pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod squish;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use color::Rgba;
pub use config::{ButtonConfig, Config};
pub use geometry::{Rect, RoundedRect, Scale};
pub use squish::{ButtonMode, SquishButton, Transition};

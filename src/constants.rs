// SPDX-License-Identifier: GPL-3.0-only

//! Widget-wide constants

use std::time::Duration;

/// Default number of pixels the inner shape shrinks by while pressed
pub const DEFAULT_SCALING: f32 = 20.0;

/// Default duration of the press/release scale animation
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// Default gap between the outer border and the inner shape
pub const DEFAULT_INNER_INSET: f32 = 5.0;

/// Fixed duration of the camera/video fill color transition.
///
/// Independent of the configured press animation duration.
pub const COLOR_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Outer border width
pub const BORDER_WIDTH: f32 = 2.0;

/// Frame ticker interval while an animation is running (~60fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Host application layout constants
pub mod ui {
    /// Default button edge length in the host window
    pub const DEFAULT_BUTTON_SIZE: f32 = 80.0;

    /// Smallest button size offered by the size slider
    pub const MIN_BUTTON_SIZE: f32 = 20.0;

    /// Largest button size offered by the size slider
    pub const MAX_BUTTON_SIZE: f32 = 240.0;

    /// Width of the size slider
    pub const SIZE_SLIDER_WIDTH: f32 = 200.0;

    /// Label width for slider rows
    pub const LABEL_WIDTH: f32 = 60.0;

    /// Title text size drawn on top of the button
    pub const TITLE_TEXT_SIZE: u16 = 14;
}

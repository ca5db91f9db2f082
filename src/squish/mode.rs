// SPDX-License-Identifier: MPL-2.0

use crate::color::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capture mode shown by the inner shape's fill color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonMode {
    /// Photo capture, white fill
    #[default]
    Camera,
    /// Video capture, red fill
    Video,
}

impl ButtonMode {
    /// Resting fill color of the inner shape in this mode
    pub fn fill_color(self) -> Rgba {
        match self {
            ButtonMode::Camera => Rgba::WHITE,
            ButtonMode::Video => Rgba::RED,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ButtonMode::Camera => ButtonMode::Video,
            ButtonMode::Video => ButtonMode::Camera,
        }
    }
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonMode::Camera => write!(f, "Camera"),
            ButtonMode::Video => write!(f, "Video"),
        }
    }
}

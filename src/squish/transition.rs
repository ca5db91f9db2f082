// SPDX-License-Identifier: MPL-2.0

use crate::animation::Easing;
use crate::color::Rgba;
use crate::geometry::Scale;
use std::time::Duration;

/// Visual transition started by a state change on the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Nothing changed visually
    None,
    /// Inner shape scale animation (press or release)
    Scale {
        from: Scale,
        to: Scale,
        duration: Duration,
        easing: Easing,
    },
    /// Inner shape fill color animation (mode change)
    FillColor {
        from: Rgba,
        to: Rgba,
        duration: Duration,
        easing: Easing,
    },
    /// A transition was due but could not run
    Skipped(SkipReason),
}

/// Why a transition was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Inner shape has zero or non-finite width or height, so no scale factor exists
    DegenerateShape,
}

impl Transition {
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }

    /// Target scale, if this is a scale transition
    pub fn target_scale(&self) -> Option<Scale> {
        match self {
            Transition::Scale { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Target color, if this is a fill color transition
    pub fn target_color(&self) -> Option<Rgba> {
        match self {
            Transition::FillColor { to, .. } => Some(*to),
            _ => None,
        }
    }
}

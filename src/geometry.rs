// SPDX-License-Identifier: MPL-2.0

//! Rectangle geometry for the button's border and inner shape

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Same size, origin moved to (0, 0)
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    ///
    /// The result never has a negative size; an over-inset rectangle collapses
    /// onto its center.
    pub fn inset_by(&self, dx: f32, dy: f32) -> Rect {
        let width = (self.width - 2.0 * dx).max(0.0);
        let height = (self.height - 2.0 * dy).max(0.0);
        let (cx, cy) = self.center();
        Rect::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when either dimension is zero, negative or not a number
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Rounded rectangle path
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f32,
}

impl RoundedRect {
    pub fn new(rect: Rect, corner_radius: f32) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }

    /// Bounding box of the path
    pub fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Per-axis scale transform applied around the shape's center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Apply to a rectangle, keeping its center fixed
    pub fn apply(&self, rect: Rect) -> Rect {
        let width = rect.width * self.x;
        let height = rect.height * self.y;
        let (cx, cy) = rect.center();
        Rect::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_keeps_center() {
        let rect = Rect::from_size(80.0, 80.0).inset_by(5.0, 5.0);
        assert_eq!(rect, Rect::new(5.0, 5.0, 70.0, 70.0));
    }

    #[test]
    fn test_inset_non_square() {
        let rect = Rect::new(10.0, 20.0, 120.0, 60.0).inset_by(4.0, 4.0);
        assert_eq!(rect, Rect::new(14.0, 24.0, 112.0, 52.0));
    }

    #[test]
    fn test_over_inset_collapses() {
        let rect = Rect::from_size(10.0, 10.0).inset_by(8.0, 8.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.center(), (5.0, 5.0));
        assert!(rect.is_empty());
    }

    #[test]
    fn test_scale_about_center() {
        let rect = Scale::new(0.5, 0.25).apply(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(rect, Rect::new(25.0, 15.0, 50.0, 10.0));
        assert_eq!(Scale::IDENTITY.apply(rect), rect);
    }

    #[test]
    fn test_empty_detection() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::from_size(f32::NAN, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}

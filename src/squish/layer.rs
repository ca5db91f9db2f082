// SPDX-License-Identifier: MPL-2.0

//! Filled rounded-rectangle layer drawn inside the button border

use crate::animation::AnimationSet;
use crate::color::Rgba;
use crate::geometry::{Rect, RoundedRect, Scale};
use std::time::Instant;

/// Inner shape of the button.
///
/// `fill_color` and `scale` are the resting (model) values. While an animation
/// for a property is in flight, the presented value comes from the animation.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    frame: Rect,
    path: RoundedRect,
    fill_color: Rgba,
    scale: Scale,
    animations: AnimationSet,
}

impl ShapeLayer {
    pub fn new(frame: Rect, path: RoundedRect, fill_color: Rgba) -> Self {
        Self {
            frame,
            path,
            fill_color,
            scale: Scale::IDENTITY,
            animations: AnimationSet::default(),
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn path(&self) -> RoundedRect {
        self.path
    }

    pub fn set_path(&mut self, path: RoundedRect) {
        self.path = path;
    }

    pub fn fill_color(&self) -> Rgba {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Rgba) {
        self.fill_color = color;
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationSet {
        &mut self.animations
    }

    /// Fill color as currently displayed
    pub fn presented_fill_color(&self, now: Instant) -> Rgba {
        match self.animations.fill_color() {
            Some(animation) if !animation.is_finished(now) => animation.value_at(now),
            _ => self.fill_color,
        }
    }

    /// Scale as currently displayed
    pub fn presented_scale(&self, now: Instant) -> Scale {
        match self.animations.scale() {
            Some(animation) if !animation.is_finished(now) => animation.value_at(now),
            _ => self.scale,
        }
    }

    /// Path bounds after applying the presented scale about the path's center
    pub fn presented_bounds(&self, now: Instant) -> Rect {
        self.presented_scale(now).apply(self.path.bounds())
    }
}

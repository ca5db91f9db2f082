// SPDX-License-Identifier: MPL-2.0

use super::Animation;
use crate::color::Rgba;
use crate::geometry::Scale;
use std::fmt;
use std::time::Instant;
use tracing::debug;

/// Animatable property of a shape layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    /// Combined x/y scale transform
    Scale,
    /// Fill color of the shape
    FillColor,
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationKey::Scale => write!(f, "transform.scale"),
            AnimationKey::FillColor => write!(f, "fillColor"),
        }
    }
}

/// In-flight animations of one layer, at most one per [`AnimationKey`]
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    scale: Option<Animation<Scale>>,
    fill_color: Option<Animation<Rgba>>,
}

impl AnimationSet {
    /// Start a scale animation, cancelling the previous one.
    ///
    /// Returns the cancelled animation, if any.
    pub fn add_scale(&mut self, animation: Animation<Scale>) -> Option<Animation<Scale>> {
        let previous = self.scale.replace(animation);
        if previous.is_some() {
            debug!(key = %AnimationKey::Scale, "Replaced in-flight animation");
        }
        previous
    }

    /// Start a fill color animation, cancelling the previous one.
    ///
    /// Returns the cancelled animation, if any.
    pub fn add_fill_color(&mut self, animation: Animation<Rgba>) -> Option<Animation<Rgba>> {
        let previous = self.fill_color.replace(animation);
        if previous.is_some() {
            debug!(key = %AnimationKey::FillColor, "Replaced in-flight animation");
        }
        previous
    }

    pub fn scale(&self) -> Option<&Animation<Scale>> {
        self.scale.as_ref()
    }

    pub fn fill_color(&self) -> Option<&Animation<Rgba>> {
        self.fill_color.as_ref()
    }

    /// Cancel the animation for `key`. Returns true if one was running.
    pub fn remove(&mut self, key: AnimationKey) -> bool {
        let removed = match key {
            AnimationKey::Scale => self.scale.take().is_some(),
            AnimationKey::FillColor => self.fill_color.take().is_some(),
        };
        if removed {
            debug!(%key, "Cancelled animation");
        }
        removed
    }

    /// Drop animations that have completed by `now`
    pub fn prune(&mut self, now: Instant) {
        if self.scale.is_some_and(|a| a.is_finished(now)) {
            self.scale = None;
        }
        if self.fill_color.is_some_and(|a| a.is_finished(now)) {
            self.fill_color = None;
        }
    }

    /// Keys with an animation still running at `now`
    pub fn active_keys(&self, now: Instant) -> Vec<AnimationKey> {
        let mut keys = Vec::new();
        if self.scale.is_some_and(|a| !a.is_finished(now)) {
            keys.push(AnimationKey::Scale);
        }
        if self.fill_color.is_some_and(|a| !a.is_finished(now)) {
            keys.push(AnimationKey::FillColor);
        }
        keys
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.active_keys(now).is_empty()
    }
}

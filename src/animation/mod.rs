// SPDX-License-Identifier: MPL-2.0

//! Property animations for the button's inner shape
//!
//! Animations are plain values sampled against an explicit [`Instant`], so the
//! owner decides when time advances. Each animated property has a single slot
//! in an [`AnimationSet`]; adding an animation for a property replaces the one
//! already in flight for that property and leaves the others running.
//!
//! ```ignore
//! let fade = Animation::new(Rgba::WHITE, Rgba::RED, Duration::from_millis(300), now, Easing::Linear);
//! let color = fade.value_at(now + Duration::from_millis(150));
//! ```

mod easing;
mod set;

pub use easing::Easing;
pub use set::{AnimationKey, AnimationSet};

use crate::color::Rgba;
use crate::geometry::Scale;
use std::time::{Duration, Instant};

/// Values that can be blended between two endpoints
pub trait Interpolate: Copy {
    /// Blend from `self` towards `to`, `t = 0` is `self` and `t = 1` is `to`
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Scale {
    fn interpolate(self, to: Self, t: f32) -> Self {
        // Both axes share one progress value so they always move in lockstep
        Scale::new(self.x.interpolate(to.x, t), self.y.interpolate(to.y, t))
    }
}

impl Interpolate for Rgba {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// A single from/to animation of one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation<T> {
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub begin: Instant,
    pub easing: Easing,
}

impl<T: Interpolate> Animation<T> {
    pub fn new(from: T, to: T, duration: Duration, begin: Instant, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            begin,
            easing,
        }
    }

    /// Linear progress in `0.0..=1.0`. Zero-length animations are complete immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.begin);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Presented value at `now`
    pub fn value_at(&self, now: Instant) -> T {
        let t = self.easing.apply(self.progress(now));
        self.from.interpolate(self.to, t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_linear_color_midpoint() {
        let begin = Instant::now();
        let fade = Animation::new(Rgba::WHITE, Rgba::RED, ms(300), begin, Easing::Linear);
        let mid = fade.value_at(begin + ms(150));
        assert!((mid.g - 0.5).abs() < 1e-4);
        assert!(!fade.is_finished(begin + ms(150)));
        assert!(fade.is_finished(begin + ms(300)));
        assert_eq!(fade.value_at(begin + ms(900)), Rgba::RED);
    }

    #[test]
    fn test_value_before_begin_is_from() {
        let begin = Instant::now() + ms(50);
        let grow = Animation::new(0.0f32, 10.0, ms(100), begin, Easing::Linear);
        assert_eq!(grow.value_at(begin - ms(50)), 0.0);
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let begin = Instant::now();
        let snap = Animation::new(
            Scale::IDENTITY,
            Scale::new(0.5, 0.5),
            Duration::ZERO,
            begin,
            Easing::EaseInEaseOut,
        );
        assert!(snap.is_finished(begin));
        assert_eq!(snap.value_at(begin), Scale::new(0.5, 0.5));
    }

    #[test]
    fn test_scale_axes_move_in_lockstep() {
        let begin = Instant::now();
        let press = Animation::new(
            Scale::IDENTITY,
            Scale::new(0.8, 0.6),
            ms(150),
            begin,
            Easing::EaseInEaseOut,
        );
        for step in 0..=15 {
            let value = press.value_at(begin + ms(step * 10));
            // Same fraction of the way on both axes
            let fx = (1.0 - value.x) / 0.2;
            let fy = (1.0 - value.y) / 0.4;
            assert!((fx - fy).abs() < 1e-4);
        }
    }
}

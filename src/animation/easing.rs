// SPDX-License-Identifier: MPL-2.0

//! Timing curves mapping linear progress to eased progress

use serde::{Deserialize, Serialize};

/// Timing curve of an animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start and slow finish, cubic-bezier (0.42, 0, 0.58, 1)
    EaseInEaseOut,
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInEaseOut => CubicBezier::EASE_IN_EASE_OUT.solve(t),
        }
    }
}

/// Cubic bezier timing curve with fixed endpoints (0, 0) and (1, 1)
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const EASE_IN_EASE_OUT: CubicBezier = CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    const EPSILON: f32 = 1e-6;

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * a1 + 6.0 * mt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Find the curve parameter whose x equals `x`
    fn parameter_for_x(&self, x: f32) -> f32 {
        // Newton first, bisection when the slope is too flat
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < Self::EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        while hi - lo > Self::EPSILON {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.parameter_for_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInEaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_ease_out_is_symmetric() {
        let mid = Easing::EaseInEaseOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "midpoint was {mid}");

        let early = Easing::EaseInEaseOut.apply(0.25);
        let late = Easing::EaseInEaseOut.apply(0.75);
        assert!((early + late - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_ease_in_ease_out_starts_slow() {
        // Slower than linear in the first half, faster in the second
        assert!(Easing::EaseInEaseOut.apply(0.2) < 0.2);
        assert!(Easing::EaseInEaseOut.apply(0.8) > 0.8);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = Easing::EaseInEaseOut.apply(i as f32 / 100.0);
            assert!(value + 1e-5 >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInEaseOut.apply(2.0), 1.0);
    }
}

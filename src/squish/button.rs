// SPDX-License-Identifier: MPL-2.0

//! Squish button state machine
//!
//! The button owns one [`ShapeLayer`] and drives it through two independent
//! transitions:
//! - Press/release: scales the inner shape down by `scaling` pixels and back
//! - Mode change: fades the inner fill between white (camera) and red (video)
//!
//! Every setter with a visual side effect takes the current time and returns
//! the [`Transition`] it started.

use super::layer::ShapeLayer;
use super::mode::ButtonMode;
use super::transition::{SkipReason, Transition};
use crate::animation::{Animation, AnimationKey, Easing};
use crate::color::Rgba;
use crate::config::ButtonConfig;
use crate::constants;
use crate::geometry::{Rect, RoundedRect, Scale};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outer border drawn on the button's own frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub corner_radius: f32,
    pub width: f32,
    pub color: Rgba,
}

/// Title colors for the normal and pressed states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleColors {
    pub normal: Rgba,
    pub highlighted: Rgba,
}

/// Everything needed to draw the button at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSnapshot {
    /// Button bounds (origin at zero)
    pub bounds: Rect,
    pub border: BorderStyle,
    /// Unscaled inner path
    pub inner_path: RoundedRect,
    /// Inner path bounds with the presented scale applied
    pub inner_bounds: Rect,
    pub fill_color: Rgba,
    pub scale: Scale,
    pub title_color: Rgba,
}

/// Circular capture button whose inner shape squishes while pressed
#[derive(Debug, Clone)]
pub struct SquishButton {
    frame: Rect,
    scaling: f32,
    animation_duration: Duration,
    color: Rgba,
    inner_inset: f32,
    highlighted: bool,
    mode: ButtonMode,
    title: Option<String>,
    title_colors: TitleColors,
    border: BorderStyle,
    inner: ShapeLayer,
}

impl SquishButton {
    /// Button with a zero frame
    pub fn new(now: Instant) -> Self {
        Self::with_frame(Rect::ZERO, now)
    }

    pub fn with_frame(frame: Rect, now: Instant) -> Self {
        let mut button = Self::unconfigured(frame);
        button.set_up(now);
        button
    }

    /// Button built from a persisted description
    pub fn from_config(config: &ButtonConfig, now: Instant) -> Self {
        let mut button = Self::unconfigured(Rect::from_size(config.size, config.size));
        button.scaling = config.scaling;
        button.animation_duration = config.animation_duration();
        button.color = config.color;
        button.inner_inset = config.inner_inset;
        button.title = config.title.clone();
        button.set_up(now);
        button
    }

    fn unconfigured(frame: Rect) -> Self {
        Self {
            frame,
            scaling: constants::DEFAULT_SCALING,
            animation_duration: constants::DEFAULT_ANIMATION_DURATION,
            color: Rgba::WHITE,
            inner_inset: constants::DEFAULT_INNER_INSET,
            highlighted: false,
            mode: ButtonMode::default(),
            title: None,
            title_colors: TitleColors {
                normal: Rgba::WHITE,
                highlighted: Rgba::CLEAR,
            },
            border: BorderStyle {
                corner_radius: 0.0,
                width: 0.0,
                color: Rgba::WHITE,
            },
            inner: ShapeLayer::new(Rect::ZERO, RoundedRect::default(), Rgba::WHITE),
        }
    }

    /// Rebuild border and inner shape from the current frame, then reset to camera mode
    fn set_up(&mut self, now: Instant) -> Transition {
        let bounds = self.bounds();

        self.title_colors = TitleColors {
            normal: Rgba::WHITE,
            highlighted: Rgba::CLEAR,
        };
        self.border = BorderStyle {
            corner_radius: bounds.height / 2.0,
            width: constants::BORDER_WIDTH,
            color: Rgba::WHITE,
        };

        self.inner = ShapeLayer::new(bounds, self.inner_path(), self.color);
        if self.highlighted {
            // Recreated while held down: stay squished without replaying the press
            if let Some(factors) = self.scale_factors() {
                self.inner.set_scale(factors);
            }
        }

        debug!(
            width = bounds.width,
            height = bounds.height,
            inset = self.inner_inset,
            "Button set up"
        );

        self.set_mode(ButtonMode::Camera, now)
    }

    fn inner_path(&self) -> RoundedRect {
        let bounds = self.bounds();
        RoundedRect::new(
            bounds.inset_by(self.inner_inset, self.inner_inset),
            bounds.height / 2.0,
        )
    }

    /// Per-axis factors that shrink the inner shape by `scaling` pixels.
    ///
    /// Computed from the inner shape's current size. Returns `None` when the
    /// shape has no area. Factors are clamped to `0.0..=1.0`.
    pub fn scale_factors(&self) -> Option<Scale> {
        let shape = self.inner.path().bounds();
        if shape.is_empty() {
            return None;
        }
        let x = (1.0 - self.scaling / shape.width).clamp(0.0, 1.0);
        let y = (1.0 - self.scaling / shape.height).clamp(0.0, 1.0);
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some(Scale::new(x, y))
    }

    /// Set the pressed state.
    ///
    /// Only an actual change animates: pressing scales the inner shape from
    /// identity to [`scale_factors`](Self::scale_factors), releasing scales it
    /// back, both over `animation_duration` with ease-in-ease-out timing.
    pub fn set_highlighted(&mut self, highlighted: bool, now: Instant) -> Transition {
        if self.highlighted == highlighted {
            return Transition::None;
        }
        self.highlighted = highlighted;
        self.animate_highlight(now)
    }

    fn animate_highlight(&mut self, now: Instant) -> Transition {
        let Some(factors) = self.scale_factors() else {
            warn!(
                highlighted = self.highlighted,
                "Inner shape has no area, skipping scale animation"
            );
            self.inner.animations_mut().remove(AnimationKey::Scale);
            self.inner.set_scale(Scale::IDENTITY);
            return Transition::Skipped(SkipReason::DegenerateShape);
        };

        let (from, to) = if self.highlighted {
            (Scale::IDENTITY, factors)
        } else {
            (factors, Scale::IDENTITY)
        };

        let easing = Easing::EaseInEaseOut;
        self.inner.animations_mut().add_scale(Animation::new(
            from,
            to,
            self.animation_duration,
            now,
            easing,
        ));
        // The end state persists after the animation finishes
        self.inner.set_scale(to);

        debug!(
            highlighted = self.highlighted,
            scale_x = to.x,
            scale_y = to.y,
            "Started highlight animation"
        );

        Transition::Scale {
            from,
            to,
            duration: self.animation_duration,
            easing,
        }
    }

    /// Switch capture mode.
    ///
    /// Always runs, even for the current mode: cancels the in-flight color
    /// animation, fades from the displayed color to the mode color over a fixed
    /// 0.3s and sets the resting color to the target immediately.
    pub fn set_mode(&mut self, mode: ButtonMode, now: Instant) -> Transition {
        let from = self.inner.presented_fill_color(now);
        let to = mode.fill_color();
        let duration = constants::COLOR_TRANSITION_DURATION;
        let easing = Easing::Linear;

        let animations = self.inner.animations_mut();
        animations.remove(AnimationKey::FillColor);
        animations.add_fill_color(Animation::new(from, to, duration, now, easing));
        self.inner.set_fill_color(to);
        self.mode = mode;

        debug!(%mode, "Started fill color animation");

        Transition::FillColor {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Change the inset and recompute the inner path from the current bounds, without animation
    pub fn set_inner_inset(&mut self, inset: f32) {
        if !inset.is_finite() {
            warn!(inset, "Ignoring non-finite inner inset");
            return;
        }
        self.inner_inset = inset;
        self.inner.set_path(self.inner_path());
    }

    /// Move or resize the button. Re-runs setup, which resets the mode to camera.
    pub fn set_frame(&mut self, frame: Rect, now: Instant) -> Transition {
        self.frame = frame;
        self.set_up(now)
    }

    /// Pixels the inner shape shrinks by on the next press.
    ///
    /// Negative or non-finite values are ignored.
    pub fn set_scaling(&mut self, scaling: f32) {
        if !scaling.is_finite() || scaling < 0.0 {
            warn!(scaling, "Ignoring invalid press scaling");
            return;
        }
        self.scaling = scaling;
    }

    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Base inner color, applied at the next setup
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Drop finished animations. Returns true while anything is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.inner.animations_mut().prune(now);
        self.inner.animations().is_animating(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.inner.animations().is_animating(now)
    }

    pub fn snapshot(&self, now: Instant) -> ButtonSnapshot {
        ButtonSnapshot {
            bounds: self.bounds(),
            border: self.border,
            inner_path: self.inner.path(),
            inner_bounds: self.inner.presented_bounds(now),
            fill_color: self.inner.presented_fill_color(now),
            scale: self.inner.presented_scale(now),
            title_color: self.title_color(),
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    pub fn scaling(&self) -> f32 {
        self.scaling
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn inner_inset(&self) -> f32 {
        self.inner_inset
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title color for the current state; clear while pressed so text disappears
    pub fn title_color(&self) -> Rgba {
        if self.highlighted {
            self.title_colors.highlighted
        } else {
            self.title_colors.normal
        }
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn inner(&self) -> &ShapeLayer {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_setup_configures_border_and_inner_shape() {
        let frame = Rect::new(10.0, 10.0, 120.0, 60.0);
        let button = SquishButton::with_frame(frame, Instant::now());
        let border = button.border();
        assert_eq!(border.corner_radius, 30.0);
        assert_eq!(border.width, 2.0);
        assert_eq!(border.color, Rgba::WHITE);

        let path = button.inner().path();
        assert_eq!(path.rect, Rect::new(5.0, 5.0, 110.0, 50.0));
        assert_eq!(path.corner_radius, 30.0);
        assert_eq!(button.inner().frame(), Rect::from_size(120.0, 60.0));
    }

    #[test]
    fn test_title_hidden_while_pressed() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        assert_eq!(button.title_color(), Rgba::WHITE);
        button.set_highlighted(true, now);
        assert_eq!(button.title_color(), Rgba::CLEAR);
    }

    #[test]
    fn test_press_scale_uses_inner_size() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        let transition = button.set_highlighted(true, now);
        let expected = 1.0 - 20.0 / 70.0;
        let to = transition.target_scale().unwrap();
        assert!((to.x - expected).abs() < 1e-6);
        assert!((to.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_press_animation_timeline() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(110.0, 110.0), now);
        button.set_highlighted(true, now);

        assert_eq!(button.inner().presented_scale(now), Scale::IDENTITY);
        let halfway = button.inner().presented_scale(now + ms(75));
        assert!(halfway.x < 1.0 && halfway.x > 0.8);
        assert_eq!(button.inner().presented_scale(now + ms(150)), Scale::new(0.8, 0.8));
        // Persists after completion
        assert!(!button.tick(now + ms(500)));
        assert_eq!(button.inner().presented_scale(now + ms(500)), Scale::new(0.8, 0.8));
    }

    #[test]
    fn test_zero_size_skips_scale() {
        let now = Instant::now();
        let mut button = SquishButton::new(now);
        assert_eq!(
            button.set_highlighted(true, now),
            Transition::Skipped(SkipReason::DegenerateShape)
        );
        assert!(button.is_highlighted());
        assert_eq!(button.inner().presented_scale(now), Scale::IDENTITY);
        assert!(button.inner().animations().scale().is_none());
    }

    #[test]
    fn test_oversized_scaling_is_clamped() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(30.0, 30.0), now);
        button.set_scaling(100.0);
        assert_eq!(button.scale_factors(), Some(Scale::new(0.0, 0.0)));
    }

    #[test]
    fn test_mode_color_fades_from_presented_color() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        let later = now + ms(400);
        button.set_mode(ButtonMode::Video, later);

        // Interrupt halfway: the new fade starts where the old one was
        let halfway = later + ms(150);
        let shown = button.inner().presented_fill_color(halfway);
        let transition = button.set_mode(ButtonMode::Camera, halfway);
        match transition {
            Transition::FillColor {
                from,
                to,
                duration,
                easing,
            } => {
                assert_eq!(from, shown);
                assert_eq!(to, Rgba::WHITE);
                assert_eq!(duration, ms(300));
                assert_eq!(easing, Easing::Linear);
            }
            other => panic!("unexpected transition {other:?}"),
        }
        assert_eq!(button.inner().fill_color(), Rgba::WHITE);
    }

    #[test]
    fn test_mode_change_keeps_press_animation() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        button.set_highlighted(true, now);
        button.set_mode(ButtonMode::Video, now + ms(10));
        assert!(button.inner().animations().scale().is_some());
    }

    #[test]
    fn test_color_applied_at_setup() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        button.set_color(blue);
        button.set_frame(Rect::from_size(90.0, 90.0), now);
        // Setup fades from the base color into the camera color
        assert_eq!(button.inner().presented_fill_color(now), blue);
        assert_eq!(button.inner().fill_color(), Rgba::WHITE);
    }

    #[test]
    fn test_resize_while_pressed_stays_squished() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        button.set_highlighted(true, now);
        button.set_frame(Rect::from_size(110.0, 110.0), now + ms(200));
        assert_eq!(button.inner().scale(), Scale::new(0.8, 0.8));
    }

    #[test]
    fn test_non_finite_inset_ignored() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(80.0, 80.0), now);
        button.set_inner_inset(f32::NAN);
        assert_eq!(button.inner_inset(), 5.0);
    }

    #[test]
    fn test_invalid_scaling_keeps_previous_depth() {
        let now = Instant::now();
        let mut button = SquishButton::with_frame(Rect::from_size(90.0, 90.0), now);
        button.set_scaling(-10.0);
        assert_eq!(button.scaling(), 20.0);
        button.set_scaling(f32::INFINITY);
        assert_eq!(button.scaling(), 20.0);

        // 90 - 2 * 5 = 80 wide inner path, 1 - 20 / 80
        let transition = button.set_highlighted(true, now);
        assert_eq!(transition.target_scale(), Some(Scale::new(0.75, 0.75)));
    }
}

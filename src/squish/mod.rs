// SPDX-License-Identifier: MPL-2.0

//! Squish button widget model
//!
//! - `button`: the [`SquishButton`] state machine and its setup procedure
//! - `layer`: the inner [`ShapeLayer`] with resting and presented values
//! - `mode`: camera/video [`ButtonMode`]
//! - `transition`: [`Transition`] values returned by the setters

mod button;
mod layer;
mod mode;
mod transition;

pub use button::{BorderStyle, ButtonSnapshot, SquishButton, TitleColors};
pub use layer::ShapeLayer;
pub use mode::ButtonMode;
pub use transition::{SkipReason, Transition};

// SPDX-License-Identifier: MPL-2.0

//! Capture controls module
//!
//! - Squish button (camera/video)

pub mod squish_button;

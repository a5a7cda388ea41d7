// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.

use crate::gallery::ForwardWrap;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Forward wrap applied when the config does not choose one.
pub const DEFAULT_FORWARD_WRAP: ForwardWrap = ForwardWrap::Cyclic;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Share of the window height given to the artwork image.
pub const WALL_HEIGHT_PORTION: u16 = 7;

/// Share of the window height given to the description block.
pub const DESCRIPTOR_HEIGHT_PORTION: u16 = 2;

/// Width portions of the Previous button, the spacer and the Next button.
pub const CONTROL_BUTTON_PORTION: u16 = 4;
pub const CONTROL_SPACER_PORTION: u16 = 2;

/// Font size of the artwork description.
pub const DESCRIPTION_FONT_SIZE: f32 = 20.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(WALL_HEIGHT_PORTION > DESCRIPTOR_HEIGHT_PORTION);
    assert!(CONTROL_BUTTON_PORTION > 0);
    assert!(DESCRIPTION_FONT_SIZE > 0.0);
};

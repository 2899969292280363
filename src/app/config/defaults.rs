// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! The editing bounds themselves live next to the value objects in
//! [`crate::domain::editing`]; the editor defaults here are taken from there
//! so both stay in sync.

use crate::domain::editing::{kernel_bounds, thickness_bounds};

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Kernel size pre-filled in the blur prompt.
pub const DEFAULT_BLUR_KERNEL: u32 = kernel_bounds::DEFAULT;

/// Thickness pre-filled in the line prompt.
pub const DEFAULT_LINE_THICKNESS: u32 = thickness_bounds::DEFAULT;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a success toast stays on screen.
pub const TOAST_DURATION_SECS: u64 = 3;

/// How long a warning toast stays on screen.
pub const WARNING_TOAST_DURATION_SECS: u64 = 5;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window size before any image is loaded.
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

/// Smallest window the resize-to-fit request may produce, so the toolbar
/// stays usable for tiny images.
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

/// Vertical space taken by the toolbar above the image.
pub const TOOLBAR_HEIGHT: f32 = 56.0;

// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for the parameters of the editing
//! handlers. Unlike display settings, these values are never clamped: an out
//! of range value is a user error and is rejected.

use crate::error::EditError;

// =============================================================================
// Kernel Size Bounds
// =============================================================================

/// Gaussian kernel size bounds.
pub mod kernel_bounds {
    /// Smallest kernel (identity blur).
    pub const MIN: u32 = 1;
    /// Largest accepted kernel.
    pub const MAX: u32 = 255;
    /// Default kernel offered by the blur prompt.
    pub const DEFAULT: u32 = 5;
}

// =============================================================================
// KernelSize
// =============================================================================

/// Side length of a square Gaussian kernel, guaranteed odd and within
/// [`kernel_bounds::MIN`]..=[`kernel_bounds::MAX`].
///
/// # Example
///
/// ```ignore
/// let k = KernelSize::try_new(5)?;
/// assert_eq!(k.radius(), 2);
/// assert!(KernelSize::try_new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelSize(u32);

impl KernelSize {
    /// Validates a kernel size.
    ///
    /// # Errors
    ///
    /// [`EditError::EvenKernelSize`] for even values,
    /// [`EditError::InvalidKernelSize`] for values outside the bounds.
    pub fn try_new(value: u32) -> Result<Self, EditError> {
        if !(kernel_bounds::MIN..=kernel_bounds::MAX).contains(&value) {
            return Err(EditError::InvalidKernelSize(value.to_string()));
        }
        if value % 2 == 0 {
            return Err(EditError::EvenKernelSize(value));
        }
        Ok(Self(value))
    }

    /// Parses user input, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, EditError> {
        let trimmed = input.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| EditError::InvalidKernelSize(trimmed.to_string()))?;
        Self::try_new(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Number of taps on each side of the centre tap.
    #[must_use]
    pub fn radius(self) -> u32 {
        self.0 / 2
    }

    /// Standard deviation derived from the kernel size, using the same rule
    /// as OpenCV when sigma is left unspecified.
    #[must_use]
    pub fn sigma(self) -> f32 {
        0.3 * ((self.0 as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self(kernel_bounds::DEFAULT)
    }
}

// =============================================================================
// Line Thickness Bounds
// =============================================================================

/// Line thickness bounds in pixels.
pub mod thickness_bounds {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 32_767;
    pub const DEFAULT: u32 = 2;
}

// =============================================================================
// LineThickness
// =============================================================================

/// Stroke width of a drawn line, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineThickness(u32);

impl LineThickness {
    /// Validates a thickness.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidThickness`] for values outside the bounds.
    pub fn try_new(value: i64) -> Result<Self, EditError> {
        if (thickness_bounds::MIN..=thickness_bounds::MAX).contains(&value) {
            // Bounded above by 32767, so the narrowing cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pixels = value as u32;
            Ok(Self(pixels))
        } else {
            Err(EditError::InvalidThickness(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for LineThickness {
    fn default() -> Self {
        Self(thickness_bounds::DEFAULT)
    }
}

// =============================================================================
// LineSegment
// =============================================================================

/// Integer pixel coordinate. May lie outside the image; drawing is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A straight line from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub thickness: LineThickness,
}

impl LineSegment {
    #[must_use]
    pub fn new(start: Point, end: Point, thickness: LineThickness) -> Self {
        Self {
            start,
            end,
            thickness,
        }
    }
}

// =============================================================================
// Channel
// =============================================================================

/// One colour component of an RGB buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Sample index of this channel inside an RGB pixel.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Fluent key of the channel label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Channel::Red => "channel-red",
            Channel::Green => "channel-green",
            Channel::Blue => "channel-blue",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

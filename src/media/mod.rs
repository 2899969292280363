// SPDX-License-Identifier: MPL-2.0
//! Image data, pixel operations and camera capture.
//!
//! - [`buffer`]: the working image, RGB or single-channel
//! - [`transform`]: blur, grayscale, line drawing, channel extraction
//! - [`camera`]: FFmpeg-backed frame capture
//! - [`image`]: display-ready RGBA handles

pub mod buffer;
pub mod camera;
pub mod image;
pub mod transform;

pub use buffer::ImageBuffer;
pub use camera::{CameraCapture, CameraEvent, CameraFrame, CameraSource};
pub use image::ImageData;

// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! - [`KernelSize`]: odd Gaussian kernel size
//! - [`LineThickness`]: stroke width for line drawing
//! - [`LineSegment`]: two end points plus a thickness
//! - [`Channel`]: one colour component of an RGB image

pub mod newtypes;

pub use newtypes::{
    kernel_bounds, thickness_bounds, Channel, KernelSize, LineSegment, LineThickness, Point,
};

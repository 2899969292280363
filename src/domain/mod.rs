// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects for the editing handlers.
//!
//! This module holds the validated parameter types the workbench builds from
//! prompt input. It depends on nothing but `std` and the crate error types.
//!
//! # Modules
//!
//! - [`editing`]: [`KernelSize`](editing::KernelSize),
//!   [`LineThickness`](editing::LineThickness), [`LineSegment`](editing::LineSegment),
//!   [`Channel`](editing::Channel)

pub mod editing;

// SPDX-License-Identifier: MPL-2.0
//! `image_processor` is a small desktop image processor built with the Iced
//! GUI framework.
//!
//! An image is loaded from disk or captured from a camera, then blurred,
//! converted to grayscale, drawn on, or inspected one colour channel at a
//! time. Each operation replaces the single working buffer and the window is
//! resized to fit the result.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

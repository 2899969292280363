// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`workbench`] - Toolbar, canvas and parameter prompts over the current image
//! - [`camera_preview`] - Live camera feed until a frame is kept or discarded
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (modal overlay, error dialog)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod camera_preview;
pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod workbench;

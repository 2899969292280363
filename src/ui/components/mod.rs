// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! - [`modal`] - Blocking overlay that dims and disables whatever is below it
//! - [`error_dialog`] - The modal error dialog, the single failure surface

pub mod error_dialog;
pub mod modal;

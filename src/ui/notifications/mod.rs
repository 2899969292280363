// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-blocking feedback.
//!
//! Notifications appear temporarily to confirm actions (image saved, frame
//! captured) or report recoverable problems (unreadable settings). Failures
//! of the editing handlers use the modal error dialog instead.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-image-saved").with_arg("path", "out.png"));
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;

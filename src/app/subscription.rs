// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) to whatever currently
//! has the focus: the error dialog, an open prompt, the camera preview, or
//! nothing. Window events are always forwarded so the window id is known
//! when the window has to be resized.

use super::{Message, Screen};
use crate::ui::camera_preview;
use crate::ui::components::error_dialog;
use crate::ui::workbench::{self, PromptMessage};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Who receives keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    /// No shortcuts; only window events are forwarded.
    None,
    /// `Enter` or `Escape` closes the error dialog.
    ErrorDialog,
    /// `Enter` submits the prompt, `Escape` cancels it.
    Prompt,
    /// `Space` keeps the current frame, `Escape` leaves the preview.
    CameraPreview,
}

impl KeyTarget {
    /// The error dialog wins over everything else, then the active screen.
    #[must_use]
    pub fn resolve(screen: Screen, error_open: bool, prompt_open: bool) -> Self {
        if error_open {
            KeyTarget::ErrorDialog
        } else if screen == Screen::CameraPreview {
            KeyTarget::CameraPreview
        } else if prompt_open {
            KeyTarget::Prompt
        } else {
            KeyTarget::None
        }
    }
}

/// Creates the event subscription for the current key target.
///
/// Keys already captured by a widget (e.g. `Enter` in a focused text input,
/// which submits on its own) are not routed a second time.
pub fn create_event_subscription(target: KeyTarget) -> Subscription<Message> {
    match target {
        KeyTarget::None => event::listen_with(|event, _status, window_id| {
            window_message(&event, window_id)
        }),
        KeyTarget::ErrorDialog => event::listen_with(|event, status, window_id| {
            window_message(&event, window_id).or_else(|| {
                match (status, named_key(&event)?) {
                    (event::Status::Ignored, Named::Enter | Named::Escape) => Some(
                        Message::ErrorDialog(error_dialog::Message::Dismiss),
                    ),
                    _ => None,
                }
            })
        }),
        KeyTarget::Prompt => event::listen_with(|event, status, window_id| {
            window_message(&event, window_id).or_else(|| {
                let prompt = match (status, named_key(&event)?) {
                    (event::Status::Ignored, Named::Enter) => PromptMessage::Submit,
                    (_, Named::Escape) => PromptMessage::Cancel,
                    _ => return None,
                };
                Some(Message::Workbench(workbench::Message::Prompt(prompt)))
            })
        }),
        KeyTarget::CameraPreview => event::listen_with(|event, status, window_id| {
            window_message(&event, window_id).or_else(|| {
                let preview = match (status, named_key(&event)?) {
                    (event::Status::Ignored, Named::Space) => camera_preview::Message::Confirm,
                    (event::Status::Ignored, Named::Escape) => camera_preview::Message::Cancel,
                    _ => return None,
                };
                Some(Message::CameraPreview(preview))
            })
        }),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Streams camera frames while the preview is shown. Returning no
/// subscription stops the capture worker.
pub fn create_camera_subscription(
    preview: Option<&camera_preview::State>,
) -> Subscription<Message> {
    preview.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::CameraPreview)
    })
}

fn window_message(event: &Event, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => {
            Some(Message::WindowIdentified(window_id))
        }
        _ => None,
    }
}

fn named_key(event: &Event) -> Option<Named> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => Some(*named),
        _ => None,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen is drawn first, the error dialog (if any) above it and
//! the toasts on top of everything.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::camera_preview;
use crate::ui::components::error_dialog::ErrorDialog;
use crate::ui::components::modal::modal;
use crate::ui::notifications::{self, Toast};
use crate::ui::workbench;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub workbench: &'a workbench::State,
    pub camera_preview: Option<&'a camera_preview::State>,
    pub error_dialog: Option<&'a ErrorDialog>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.camera_preview) {
        (Screen::CameraPreview, Some(preview)) => {
            preview.view(ctx.i18n).map(Message::CameraPreview)
        }
        _ => ctx
            .workbench
            .view(workbench::ViewContext { i18n: ctx.i18n })
            .map(Message::Workbench),
    };

    let screen = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    // The dialog is dismissed with its OK button only, not by clicking
    // the backdrop.
    let with_dialog: Element<'_, Message> = match ctx.error_dialog {
        Some(dialog) => modal(
            screen,
            dialog.view(ctx.i18n).map(Message::ErrorDialog),
            None,
        ),
        None => screen.into(),
    };

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(with_dialog)
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        with_dialog
    }
}

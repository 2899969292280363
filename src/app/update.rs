// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component events are turned into side effects here: native file dialogs,
//! window resizing, screen switches, the error dialog and toasts.

use super::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TOOLBAR_HEIGHT};
use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::buffer::SUPPORTED_EXTENSIONS;
use crate::media::CameraSource;
use crate::ui::camera_preview;
use crate::ui::components::error_dialog::{self, ErrorDialog};
use crate::ui::notifications::{self, Notification};
use crate::ui::workbench;
use iced::{window, Size, Task};
use std::path::{Path, PathBuf};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub workbench: &'a mut workbench::State,
    pub camera_preview: &'a mut Option<camera_preview::State>,
    pub camera_source: &'a CameraSource,
    pub camera_sessions: &'a mut u64,
    pub error_dialog: &'a mut Option<ErrorDialog>,
    pub window_id: &'a mut Option<window::Id>,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Opens the error dialog. A second failure replaces the first.
    fn show_error(&mut self, error: Error) {
        log::warn!("{error}");
        *self.error_dialog = Some(ErrorDialog::new(error));
    }

    fn leave_camera(&mut self) {
        *self.camera_preview = None;
        *self.screen = Screen::Workbench;
    }

    fn persist_state(&mut self) {
        if let Some(key) = self.persisted.save() {
            self.notifications.push(Notification::warning(key));
        }
    }
}

pub fn handle_workbench_message(
    ctx: &mut UpdateContext<'_>,
    message: workbench::Message,
) -> Task<Message> {
    match ctx.workbench.update(message) {
        workbench::Event::None => Task::none(),
        workbench::Event::OpenFileDialog => open_file_dialog(
            ctx.i18n.tr("dialog-filter-images"),
            ctx.persisted.last_open_directory.clone(),
        ),
        workbench::Event::SaveFileDialog => save_file_dialog(
            ctx.i18n.tr("dialog-filter-png"),
            ctx.i18n.tr("dialog-filter-jpeg"),
            ctx.persisted.last_save_directory.clone(),
        ),
        workbench::Event::StartCamera => {
            *ctx.camera_sessions += 1;
            log::info!(
                "starting camera {} ({})",
                ctx.camera_source.device,
                ctx.camera_source.input_format
            );
            *ctx.camera_preview = Some(camera_preview::State::new(
                ctx.camera_source.clone(),
                *ctx.camera_sessions,
            ));
            *ctx.screen = Screen::CameraPreview;
            Task::none()
        }
        workbench::Event::Redrawn { width, height } => {
            resize_to_fit(*ctx.window_id, width, height)
        }
        workbench::Event::Failed(error) => {
            ctx.show_error(error);
            Task::none()
        }
    }
}

pub fn handle_camera_message(
    ctx: &mut UpdateContext<'_>,
    message: camera_preview::Message,
) -> Task<Message> {
    let Some(preview) = ctx.camera_preview.as_mut() else {
        // Late frames from a preview that was already closed.
        return Task::none();
    };

    match preview.update(message) {
        camera_preview::Event::None => Task::none(),
        camera_preview::Event::Captured(buffer) => {
            ctx.leave_camera();
            let (width, height) = ctx.workbench.set_buffer(buffer);
            ctx.notifications
                .push(Notification::success("notification-frame-captured"));
            resize_to_fit(*ctx.window_id, width, height)
        }
        camera_preview::Event::Cancelled => {
            ctx.leave_camera();
            Task::none()
        }
        camera_preview::Event::Failed(error) => {
            ctx.leave_camera();
            ctx.show_error(error);
            Task::none()
        }
    }
}

pub fn handle_error_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: error_dialog::Message,
) -> Task<Message> {
    if let Some(dialog) = ctx.error_dialog.as_mut() {
        if dialog.update(message) == error_dialog::Event::Dismissed {
            *ctx.error_dialog = None;
        }
    }
    Task::none()
}

/// Loads the chosen file. Cancelling the dialog changes nothing.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    load_path(ctx, &path)
}

/// Loads `path` into the workbench, used by the open dialog and the
/// command line.
pub fn load_path(ctx: &mut UpdateContext<'_>, path: &Path) -> Task<Message> {
    match ctx.workbench.load_from_path(path) {
        Ok((width, height)) => {
            ctx.persisted.remember_open(path);
            ctx.persist_state();
            resize_to_fit(*ctx.window_id, width, height)
        }
        Err(error) => {
            ctx.show_error(error);
            Task::none()
        }
    }
}

pub fn handle_save_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    match ctx.workbench.save_to_path(&path) {
        Ok(()) => {
            ctx.notifications.push(
                Notification::success("notification-image-saved")
                    .with_arg("path", path.display().to_string()),
            );
            ctx.persisted.remember_save(&path);
            ctx.persist_state();
        }
        Err(error) => ctx.show_error(error),
    }
    Task::none()
}

/// Remembers the window id and, if an image is already shown (e.g. loaded
/// from the command line before the window existed), fits the window to it.
pub fn handle_window_identified(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if ctx.window_id.replace(id).is_some() {
        return Task::none();
    }
    match ctx.workbench.display() {
        Some(data) => resize_to_fit(Some(id), data.width, data.height),
        None => Task::none(),
    }
}

fn open_file_dialog(filter_name: String, last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter_name, SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

fn save_file_dialog(
    png_filter: String,
    jpeg_filter: String,
    last_directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name("image.png")
                .add_filter(png_filter, &["png"])
                .add_filter(jpeg_filter, &["jpg", "jpeg"]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveFileDialogResult,
    )
}

/// Window size that shows a `width`×`height` image under the toolbar.
#[must_use]
pub fn fitted_window_size(width: u32, height: u32) -> Size {
    // Image sides are far below f32's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (width as f32, height as f32);
    Size::new(
        width.max(MIN_WINDOW_WIDTH),
        (height + TOOLBAR_HEIGHT).max(MIN_WINDOW_HEIGHT),
    )
}

fn resize_to_fit(window_id: Option<window::Id>, width: u32, height: u32) -> Task<Message> {
    match window_id {
        Some(id) => window::resize(id, fitted_window_size(width, height)),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_window_adds_toolbar() {
        let size = fitted_window_size(800, 600);
        assert_eq!(size, Size::new(800.0, 600.0 + TOOLBAR_HEIGHT));
    }

    #[test]
    fn fitted_window_respects_minimum() {
        let size = fitted_window_size(10, 10);
        assert_eq!(size, Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }
}

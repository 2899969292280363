// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::camera_preview;
use crate::ui::components::error_dialog;
use crate::ui::notifications;
use crate::ui::workbench;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Workbench(workbench::Message),
    CameraPreview(camera_preview::Message),
    ErrorDialog(error_dialog::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick while toasts are visible.
    Tick(Instant),
    /// Result from the open file dialog. `None` when cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save file dialog. `None` when cancelled.
    SaveFileDialogResult(Option<PathBuf>),
    /// The main window was opened or resized; its id is needed to resize it.
    WindowIdentified(window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to load on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over `IMAGE_PROCESSOR_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `IMAGE_PROCESSOR_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

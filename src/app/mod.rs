// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the workbench, the
//! camera preview and the error dialog.
//!
//! The `App` struct wires together the screens, localization and persisted
//! state, and translates component events into side effects like file
//! dialogs or window resizing. Policy decisions (minimum window size, which
//! failures open the error dialog) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::KeyTarget;
pub use update::fitted_window_size;

use crate::i18n::fluent::I18n;
use crate::media::CameraSource;
use crate::ui::camera_preview;
use crate::ui::components::error_dialog::ErrorDialog;
use crate::ui::notifications::{self, Notification};
use crate::ui::workbench::{self, PromptDefaults};
use config::{
    Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    workbench: workbench::State,
    camera_preview: Option<camera_preview::State>,
    camera_source: CameraSource,
    /// Incremented for every preview so each gets a fresh capture worker.
    camera_sessions: u64,
    error_dialog: Option<ErrorDialog>,
    window_id: Option<window::Id>,
    theme: Theme,
    /// Persisted application state (last open/save directories).
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_image", &self.workbench.has_image())
            .field("error_open", &self.error_dialog.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`, but the flags are consumed only once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and state from disk, then builds the app.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = Self::with_config(flags.lang, &config, app_state);
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => app.load_path(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the app from already loaded configuration.
    #[must_use]
    pub fn with_config(
        lang: Option<String>,
        config: &Config,
        app_state: persisted_state::AppState,
    ) -> Self {
        let defaults = PromptDefaults {
            kernel: config.editor.blur_kernel(),
            thickness: config.editor.line_thickness(),
        };

        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::Workbench,
            workbench: workbench::State::new(defaults),
            camera_preview: None,
            camera_source: config.camera.source(),
            camera_sessions: 0,
            error_dialog: None,
            window_id: None,
            theme: config.general.theme_mode.iced_theme(),
            app_state,
            notifications: notifications::Manager::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn workbench(&self) -> &workbench::State {
        &self.workbench
    }

    #[must_use]
    pub fn error_dialog(&self) -> Option<&ErrorDialog> {
        self.error_dialog.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn app_state(&self) -> &persisted_state::AppState {
        &self.app_state
    }

    /// Loads an image as if it had been picked in the open dialog.
    pub fn load_path(&mut self, path: PathBuf) -> Task<Message> {
        update::load_path(&mut self.context(), &path)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let target = KeyTarget::resolve(
            self.screen,
            self.error_dialog.is_some(),
            self.workbench.has_prompt(),
        );
        let event_sub = subscription::create_event_subscription(target);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let camera_sub = subscription::create_camera_subscription(self.camera_preview.as_ref());

        Subscription::batch([event_sub, tick_sub, camera_sub])
    }

    /// Handles one message. Public so tests can drive the app headlessly.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Workbench(message) => {
                // The dialog blocks all input below it.
                if self.error_dialog.is_some() {
                    return Task::none();
                }
                update::handle_workbench_message(&mut self.context(), message)
            }
            Message::CameraPreview(message) => {
                update::handle_camera_message(&mut self.context(), message)
            }
            Message::ErrorDialog(message) => {
                update::handle_error_dialog_message(&mut self.context(), message)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut self.context(), path)
            }
            Message::SaveFileDialogResult(path) => {
                update::handle_save_file_dialog_result(&mut self.context(), path)
            }
            Message::WindowIdentified(id) => {
                update::handle_window_identified(&mut self.context(), id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            workbench: &self.workbench,
            camera_preview: self.camera_preview.as_ref(),
            error_dialog: self.error_dialog.as_ref(),
            notifications: &self.notifications,
        })
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            workbench: &mut self.workbench,
            camera_preview: &mut self.camera_preview,
            camera_source: &self.camera_source,
            camera_sessions: &mut self.camera_sessions,
            error_dialog: &mut self.error_dialog,
            window_id: &mut self.window_id,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use image_processor::app::config::{self, Config};
use image_processor::app::paths::ENV_DATA_DIR;
use image_processor::app::persisted_state::AppState;
use image_processor::app::{App, Message, Screen};
use image_processor::error::{EditError, Error};
use image_processor::i18n::fluent::I18n;
use image_processor::media::ImageBuffer;
use image_processor::ui::components::error_dialog;
use image_processor::ui::workbench::{self, Field, PromptMessage, ToolbarMessage};
use image_rs::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::{tempdir, TempDir};

static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Points the data directory at a fresh temp dir so state writes stay
/// isolated.
fn isolated_data_dir() -> (MutexGuard<'static, ()>, TempDir) {
    let guard = DATA_DIR_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let dir = tempdir().expect("temp dir");
    std::env::set_var(ENV_DATA_DIR, dir.path());
    (guard, dir)
}

fn write_sample(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(16, 12, |x, y| Rgb([(x * 15) as u8, (y * 20) as u8, 128]))
        .save(&path)
        .expect("write sample");
    path
}

fn app() -> App {
    App::with_config(Some("en-US".into()), &Config::default(), AppState::default())
}

fn toolbar(app: &mut App, message: ToolbarMessage) {
    let _ = app.update(Message::Workbench(workbench::Message::Toolbar(message)));
}

fn prompt(app: &mut App, message: PromptMessage) {
    let _ = app.update(Message::Workbench(workbench::Message::Prompt(message)));
}

fn current_edit_error(app: &App) -> Option<EditError> {
    match app.error_dialog()?.error() {
        Error::Edit(err) => Some(err.clone()),
        _ => None,
    }
}

#[test]
fn language_resolution_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("ru".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "ru");

    // CLI wins over config.
    assert_eq!(
        I18n::new(Some("en-US".into()), &loaded)
            .current_locale()
            .to_string(),
        "en-US"
    );
}

#[test]
fn loading_an_image_records_open_directory() {
    let (_guard, data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let path = write_sample(images.path(), "sample.png");

    let mut app = app();
    let _ = app.load_path(path);

    let buffer = app.workbench().buffer().expect("image loaded");
    assert_eq!(buffer.dimensions(), (16, 12));
    assert!(app.error_dialog().is_none());
    assert_eq!(
        app.app_state().last_open_directory.as_deref(),
        Some(images.path())
    );

    let (persisted, warning) = AppState::load_from(Some(data_dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        persisted.last_open_directory.as_deref(),
        Some(images.path())
    );
}

#[test]
fn missing_file_opens_error_dialog_and_keeps_buffer() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let path = write_sample(images.path(), "sample.png");

    let mut app = app();
    let _ = app.load_path(path);
    let before = app.workbench().buffer().cloned();

    let _ = app.load_path(images.path().join("missing.png"));

    assert!(matches!(
        app.error_dialog().map(error_dialog::ErrorDialog::error),
        Some(Error::Io(_))
    ));
    assert_eq!(app.workbench().buffer().cloned(), before);
}

#[test]
fn cancelled_open_dialog_changes_nothing() {
    let mut app = app();
    let _ = app.update(Message::OpenFileDialogResult(None));
    assert!(app.workbench().buffer().is_none());
    assert!(app.error_dialog().is_none());
}

#[test]
fn error_dialog_blocks_workbench_until_dismissed() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "sample.png"));

    toolbar(&mut app, ToolbarMessage::Grayscale);
    toolbar(&mut app, ToolbarMessage::Grayscale);
    assert_eq!(current_edit_error(&app), Some(EditError::AlreadyGrayscale));

    // Input below the dialog is ignored.
    toolbar(&mut app, ToolbarMessage::Blur);
    assert!(!app.workbench().has_prompt());

    let _ = app.update(Message::ErrorDialog(error_dialog::Message::Dismiss));
    assert!(app.error_dialog().is_none());

    toolbar(&mut app, ToolbarMessage::Blur);
    assert!(app.workbench().has_prompt());
}

#[test]
fn even_kernel_is_rejected_without_touching_buffer() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "sample.png"));
    let before = app.workbench().buffer().cloned();

    toolbar(&mut app, ToolbarMessage::Blur);
    prompt(&mut app, PromptMessage::FieldChanged(Field::Kernel, "6".into()));
    prompt(&mut app, PromptMessage::Submit);

    assert_eq!(current_edit_error(&app), Some(EditError::EvenKernelSize(6)));
    assert_eq!(app.workbench().buffer().cloned(), before);
}

#[test]
fn non_numeric_line_input_is_rejected() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "sample.png"));
    let before = app.workbench().buffer().cloned();

    toolbar(&mut app, ToolbarMessage::DrawLine);
    prompt(&mut app, PromptMessage::FieldChanged(Field::Y1, "ten".into()));
    prompt(&mut app, PromptMessage::Submit);

    assert_eq!(
        current_edit_error(&app),
        Some(EditError::InvalidNumber { field: "y1" })
    );
    assert_eq!(app.workbench().buffer().cloned(), before);
}

#[test]
fn channel_of_grayscale_is_rejected() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "sample.png"));

    toolbar(&mut app, ToolbarMessage::Grayscale);
    assert!(app.workbench().buffer().is_some_and(ImageBuffer::is_grayscale));

    toolbar(&mut app, ToolbarMessage::ShowChannel);
    assert_eq!(current_edit_error(&app), Some(EditError::ChannelOfGrayscale));
}

#[test]
fn save_writes_file_and_notifies() {
    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "sample.png"));

    let out_dir = tempdir().expect("temp dir");
    let out = out_dir.path().join("result.jpg");
    let _ = app.update(Message::SaveFileDialogResult(Some(out.clone())));

    assert!(out.exists());
    assert!(app.error_dialog().is_none());
    assert!(app.notifications().has_notifications());
    assert_eq!(
        app.app_state().last_save_directory.as_deref(),
        Some(out_dir.path())
    );

    let reloaded = ImageBuffer::load(&out).expect("reload jpeg");
    assert_eq!(reloaded.dimensions(), (16, 12));
}

#[test]
fn camera_preview_cancel_returns_to_workbench() {
    use image_processor::ui::camera_preview;

    let mut app = app();
    toolbar(&mut app, ToolbarMessage::Capture);
    assert_eq!(app.screen(), Screen::CameraPreview);

    let _ = app.update(Message::CameraPreview(camera_preview::Message::Cancel));
    assert_eq!(app.screen(), Screen::Workbench);
    assert!(app.workbench().buffer().is_none());
}

#[test]
fn confirmed_camera_frame_replaces_buffer() {
    use image_processor::media::{CameraEvent, CameraFrame};
    use image_processor::ui::camera_preview;
    use std::sync::Arc;

    let (_guard, _data_dir) = isolated_data_dir();
    let images = tempdir().expect("temp dir");
    let mut app = app();
    let _ = app.load_path(write_sample(images.path(), "before.png"));
    assert_eq!(app.workbench().buffer().map(ImageBuffer::dimensions), Some((16, 12)));

    toolbar(&mut app, ToolbarMessage::Capture);
    assert_eq!(app.screen(), Screen::CameraPreview);

    let (width, height) = (6u32, 4u32);
    let pixels: Vec<u8> = (0..width * height)
        .flat_map(|i| [(i * 10) as u8, 40, 200])
        .collect();
    let frame = CameraFrame {
        rgb_data: Arc::new(pixels),
        width,
        height,
    };
    let _ = app.update(Message::CameraPreview(camera_preview::Message::Camera(
        CameraEvent::Frame(frame),
    )));
    assert_eq!(app.screen(), Screen::CameraPreview);

    let _ = app.update(Message::CameraPreview(camera_preview::Message::Confirm));

    assert_eq!(app.screen(), Screen::Workbench);
    assert!(app.error_dialog().is_none());
    let buffer = app.workbench().buffer().expect("captured buffer");
    assert_eq!(buffer.dimensions(), (width, height));
    assert!(!buffer.is_grayscale());
    assert!(app
        .notifications()
        .visible()
        .any(|toast| toast.key() == "notification-frame-captured"));
}

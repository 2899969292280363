// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the whole application.
//!
//! Every failure ends up in the modal error dialog, so each variant knows the
//! Fluent key of its user-facing message.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Image Error: {0}")]
    Image(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Camera Error: {0}")]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Image(_) => "error-image-decode",
            Error::Config(_) => "error-config",
            Error::Camera(err) => err.i18n_key(),
            Error::Edit(err) => err.i18n_key(),
        }
    }

    /// Technical detail shown under the localized message, when there is one.
    pub fn details(&self) -> Option<&str> {
        match self {
            Error::Io(msg) | Error::Image(msg) | Error::Config(msg) => Some(msg),
            Error::Camera(CameraError::DeviceUnavailable(msg))
            | Error::Camera(CameraError::FrameReadFailed(msg)) => Some(msg),
            Error::Edit(_) => None,
        }
    }
}

/// Rejections raised by the editing handlers. None of them touches the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no image is loaded")]
    NoImage,

    /// Kernel size was not a number or was outside the accepted range.
    #[error("invalid kernel size: {0}")]
    InvalidKernelSize(String),

    /// Gaussian kernels must have an odd size.
    #[error("kernel size must be odd, got {0}")]
    EvenKernelSize(u32),

    #[error("image is already grayscale")]
    AlreadyGrayscale,

    /// A numeric prompt field did not contain an integer.
    #[error("field `{field}` is not a valid integer")]
    InvalidNumber { field: &'static str },

    #[error("invalid line thickness: {0}")]
    InvalidThickness(i64),

    #[error("cannot extract a colour channel from a grayscale image")]
    ChannelOfGrayscale,
}

impl EditError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EditError::NoImage => "error-no-image",
            EditError::InvalidKernelSize(_) | EditError::EvenKernelSize(_) => {
                "error-invalid-kernel"
            }
            EditError::AlreadyGrayscale | EditError::ChannelOfGrayscale => {
                "error-already-grayscale"
            }
            EditError::InvalidNumber { .. } | EditError::InvalidThickness(_) => {
                "error-invalid-input"
            }
        }
    }
}

/// Failures of the camera capture loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    /// The device could not be opened or exposes no decodable video stream.
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),

    /// Reading or converting a frame failed after the device was opened.
    #[error("failed to read frame: {0}")]
    FrameReadFailed(String),
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::DeviceUnavailable(_) => "error-camera-unavailable",
            CameraError::FrameReadFailed(_) => "error-camera-frame",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn edit_errors_are_transparent() {
        let err: Error = EditError::EvenKernelSize(4).into();
        assert_eq!(format!("{}", err), "kernel size must be odd, got 4");
    }

    #[test]
    fn edit_error_i18n_keys() {
        assert_eq!(EditError::EvenKernelSize(2).i18n_key(), "error-invalid-kernel");
        assert_eq!(
            EditError::InvalidNumber { field: "x1" }.i18n_key(),
            "error-invalid-input"
        );
        assert_eq!(
            EditError::ChannelOfGrayscale.i18n_key(),
            "error-already-grayscale"
        );
    }

    #[test]
    fn camera_error_keys_and_details() {
        let err: Error = CameraError::DeviceUnavailable("/dev/video0".into()).into();
        assert_eq!(err.i18n_key(), "error-camera-unavailable");
        assert_eq!(err.details(), Some("/dev/video0"));
    }

    #[test]
    fn edit_errors_have_no_details() {
        let err: Error = EditError::AlreadyGrayscale.into();
        assert!(err.details().is_none());
    }
}

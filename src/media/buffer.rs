// SPDX-License-Identifier: MPL-2.0
//! The working image buffer.
//!
//! A buffer is either single-channel or three-channel RGB. Decoded files and
//! camera frames always start as RGB; only grayscale conversion produces a
//! single-channel buffer.

use crate::error::{Error, Result};
use crate::media::ImageData;
use image_rs::{GrayImage, ImageReader, RgbImage};
use std::path::Path;

/// File extensions offered by the open and save dialogs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq)]
pub enum ImageBuffer {
    Gray(GrayImage),
    Color(RgbImage),
}

impl ImageBuffer {
    /// Decodes an image file into an RGB buffer. The decoder is picked from
    /// the file content, so a PNG named `.jpg` still loads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Image`] when it cannot be decoded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        log::debug!(
            "decoded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        Ok(Self::Color(decoded.to_rgb8()))
    }

    /// Wraps packed RGB24 samples, as produced by the camera scaler.
    ///
    /// Returns `None` when `samples` does not hold exactly `width * height`
    /// pixels.
    #[must_use]
    pub fn from_rgb(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, samples).map(Self::Color)
    }

    /// Encodes the buffer; the format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] for extensions other than
    /// [`SUPPORTED_EXTENSIONS`] and [`Error::Io`] when the file cannot be
    /// written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !has_supported_extension(path) {
            return Err(Error::Image(format!(
                "cannot save {}: expected a .png, .jpg or .jpeg file",
                path.display()
            )));
        }
        match self {
            ImageBuffer::Gray(img) => img.save(path)?,
            ImageBuffer::Color(img) => img.save(path)?,
        }
        log::info!("saved image to {}", path.display());
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        match self {
            ImageBuffer::Gray(img) => img.width(),
            ImageBuffer::Color(img) => img.width(),
        }
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            ImageBuffer::Gray(img) => img.height(),
            ImageBuffer::Color(img) => img.height(),
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[must_use]
    pub fn is_grayscale(&self) -> bool {
        matches!(self, ImageBuffer::Gray(_))
    }

    /// Converts the buffer for display.
    #[must_use]
    pub fn to_image_data(&self) -> ImageData {
        match self {
            ImageBuffer::Gray(img) => ImageData::from_gray(img),
            ImageBuffer::Color(img) => ImageData::from_rgb(img.width(), img.height(), img.as_raw()),
        }
    }
}

/// Returns true when the path carries one of [`SUPPORTED_EXTENSIONS`].
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Luma, Rgb, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_returns_color_buffer() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 128]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let buffer = ImageBuffer::load(&image_path).expect("png should load successfully");
        assert!(!buffer.is_grayscale());
        assert_eq!(buffer.dimensions(), (4, 2));
    }

    #[test]
    fn load_gray_png_is_promoted_to_color() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("gray.png");
        GrayImage::from_pixel(3, 3, Luma([7]))
            .save(&image_path)
            .expect("failed to write temporary png");

        match ImageBuffer::load(&image_path).expect("gray png should load") {
            ImageBuffer::Color(img) => assert_eq!(img.get_pixel(0, 0), &Rgb([7, 7, 7])),
            ImageBuffer::Gray(_) => panic!("decoded files must start as colour"),
        }
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        match ImageBuffer::load(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match ImageBuffer::load(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load_keeps_pixels() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out.png");
        let buffer = ImageBuffer::Color(RgbImage::from_pixel(2, 2, Rgb([10, 20, 30])));

        buffer.save(&path).expect("save should succeed");
        assert_eq!(ImageBuffer::load(&path).expect("reload"), buffer);
    }

    #[test]
    fn load_sniffs_format_from_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mislabelled = temp_dir.path().join("actually_png.jpg");
        RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))
            .save_with_format(&mislabelled, ImageFormat::Png)
            .expect("failed to write png bytes");

        let buffer = ImageBuffer::load(&mislabelled).expect("content decides the decoder");
        assert_eq!(
            buffer,
            ImageBuffer::Color(RgbImage::from_pixel(3, 2, Rgb([1, 2, 3])))
        );
    }

    #[test]
    fn save_with_unknown_extension_fails_without_writing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let buffer = ImageBuffer::Gray(GrayImage::new(1, 1));

        for name in ["out.unknown", "out.gif", "no_extension"] {
            let path = temp_dir.path().join(name);
            assert!(matches!(buffer.save(&path), Err(Error::Image(_))), "{name}");
            assert!(!path.exists(), "{name}");
        }
    }

    #[test]
    fn save_accepts_upper_case_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("OUT.JPG");
        let buffer = ImageBuffer::Color(RgbImage::from_pixel(4, 4, Rgb([90, 90, 90])));

        buffer.save(&path).expect("jpeg save");
        assert_eq!(ImageBuffer::load(&path).expect("reload").dimensions(), (4, 4));
    }

    #[test]
    fn from_rgb_checks_sample_count() {
        assert!(ImageBuffer::from_rgb(2, 1, vec![0; 6]).is_some());
        assert!(ImageBuffer::from_rgb(2, 1, vec![0; 5]).is_none());
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(has_supported_extension(Path::new("a.PNG")));
        assert!(has_supported_extension(Path::new("b.jpeg")));
        assert!(!has_supported_extension(Path::new("c.gif")));
        assert!(!has_supported_extension(Path::new("no_extension")));
    }
}

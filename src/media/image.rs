// SPDX-License-Identifier: MPL-2.0
//! Display-ready pixel data.
//!
//! The working buffer lives in [`super::buffer`]; this type only carries what
//! the canvas needs to paint it. The pixels are owned by the handle alone.

use iced::widget::image;
use image_rs::GrayImage;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps RGBA pixels in an image handle, taking ownership of them.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Expands packed RGB samples to opaque RGBA.
    #[must_use]
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Self {
        let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
        for px in rgb.chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        Self::from_rgba(width, height, rgba)
    }

    /// Renders a single-channel image as neutral gray.
    #[must_use]
    pub fn from_gray(gray: &GrayImage) -> Self {
        let mut rgba = Vec::with_capacity(gray.as_raw().len() * 4);
        for &v in gray.as_raw() {
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
        Self::from_rgba(gray.width(), gray.height(), rgba)
    }

    /// Pixels as handed to the renderer.
    #[cfg(test)]
    pub(crate) fn handle_pixels(&self) -> &[u8] {
        match &self.handle {
            image::Handle::Rgba { pixels, .. } => pixels,
            other => panic!("display handle is not raw RGBA: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Luma;

    #[test]
    fn rgb_is_expanded_to_opaque_rgba() {
        let data = ImageData::from_rgb(2, 1, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(data.handle_pixels(), &[1, 2, 3, 255, 4, 5, 6, 255]);
        assert_eq!((data.width, data.height), (2, 1));
    }

    #[test]
    fn gray_is_replicated_on_every_channel() {
        let gray = GrayImage::from_pixel(1, 2, Luma([42]));
        let data = ImageData::from_gray(&gray);
        assert_eq!(data.handle_pixels(), &[42, 42, 42, 255, 42, 42, 42, 255]);
        assert_eq!((data.width, data.height), (1, 2));
    }

    #[test]
    fn handle_takes_the_pixels_without_copy() {
        let pixels = vec![7u8; 2 * 2 * 4];
        let address = pixels.as_ptr();
        let data = ImageData::from_rgba(2, 2, pixels);
        assert_eq!(data.handle_pixels().as_ptr(), address);
    }
}

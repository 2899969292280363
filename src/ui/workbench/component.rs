// SPDX-License-Identifier: MPL-2.0
//! Handlers over the current buffer and the view facade.
//!
//! Each handler wraps a single call into [`crate::media`]. On error the
//! buffer and display are left exactly as they were.

use crate::domain::editing::{Channel, KernelSize, LineSegment};
use crate::error::{EditError, Result};
use crate::i18n::fluent::I18n;
use crate::media::{transform, ImageBuffer, ImageData};
use iced::Element;
use std::path::Path;

use super::{view, Message, PromptDefaults, Request, State};

/// Contextual data needed to render the workbench view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new(defaults: PromptDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Render the workbench view.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    /// Reads `path` into the buffer and redraws.
    ///
    /// # Errors
    ///
    /// I/O and decode failures. The previous buffer is kept.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(u32, u32)> {
        let buffer = ImageBuffer::load(path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            buffer.width(),
            buffer.height()
        );
        Ok(self.set_buffer(buffer))
    }

    /// Replaces the buffer (after a load or a camera capture) and redraws.
    pub fn set_buffer(&mut self, buffer: ImageBuffer) -> (u32, u32) {
        self.prompt = None;
        self.buffer = Some(buffer);
        self.redraw().unwrap_or_default()
    }

    /// Blurs the buffer with a Gaussian kernel of the given size.
    pub fn apply_blur(&mut self, size: KernelSize) -> Result<(u32, u32)> {
        let buffer = self.current()?;
        let blurred = transform::gaussian_blur(buffer, size);
        log::debug!("blur with kernel {}", size.value());
        self.replace(blurred)
    }

    /// Converts a colour buffer to one channel.
    ///
    /// # Errors
    ///
    /// [`EditError::AlreadyGrayscale`] when the buffer has one channel.
    pub fn apply_grayscale(&mut self) -> Result<(u32, u32)> {
        let gray = transform::to_grayscale(self.current()?)?;
        log::debug!("converted to grayscale");
        self.replace(gray)
    }

    /// Draws `segment` in the fixed line colour.
    pub fn apply_line(&mut self, segment: &LineSegment) -> Result<(u32, u32)> {
        let mut buffer = self.current()?.clone();
        transform::draw_line(&mut buffer, segment);
        log::debug!(
            "line ({}, {}) -> ({}, {}) thickness {}",
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            segment.thickness.value()
        );
        self.replace(buffer)
    }

    /// Shows one colour channel as a grayscale image. The buffer is not
    /// modified, so the next redraw shows it again.
    ///
    /// # Errors
    ///
    /// [`EditError::ChannelOfGrayscale`] when the buffer has one channel.
    pub fn show_channel(&mut self, channel: Channel) -> Result<(u32, u32)> {
        let channel_view = transform::extract_channel(self.current()?, channel)?;
        let data = ImageData::from_gray(&channel_view);
        let size = (data.width, data.height);
        self.display = Some(data);
        Ok(size)
    }

    /// Rebuilds the display surface from the buffer.
    ///
    /// Returns the dimensions to fit the window to, or `None` without a
    /// buffer.
    pub fn redraw(&mut self) -> Option<(u32, u32)> {
        let data = self.buffer.as_ref()?.to_image_data();
        let size = (data.width, data.height);
        self.display = Some(data);
        Some(size)
    }

    /// Writes the buffer to `path`, format chosen from the extension.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.current()?.save(path)
    }

    /// Runs the handler matching a submitted prompt.
    pub fn run(&mut self, request: Request) -> Result<(u32, u32)> {
        match request {
            Request::Blur(size) => self.apply_blur(size),
            Request::Line(segment) => self.apply_line(&segment),
            Request::Channel(channel) => self.show_channel(channel),
        }
    }

    fn current(&self) -> Result<&ImageBuffer> {
        Ok(self.buffer.as_ref().ok_or(EditError::NoImage)?)
    }

    fn replace(&mut self, buffer: ImageBuffer) -> Result<(u32, u32)> {
        self.buffer = Some(buffer);
        self.redraw().ok_or_else(|| EditError::NoImage.into())
    }
}

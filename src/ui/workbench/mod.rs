// SPDX-License-Identifier: MPL-2.0
//! Workbench: the single screen that owns the current image buffer.
//!
//! This module follows the "state down, messages up" pattern. Toolbar
//! buttons either run a handler directly (grayscale), open a parameter
//! prompt (blur, line, channel), or ask the parent for a side effect through
//! an [`Event`] (file dialogs, camera). Every handler replaces the buffer
//! wholesale or leaves it untouched; there is no history.

mod component;
mod messages;
pub mod prompt;
mod view;


pub use component::ViewContext;
pub use messages::{Event, Message, PromptMessage, ToolbarMessage};
pub use prompt::{Field, Prompt, Request};

use crate::domain::editing::{KernelSize, LineThickness};
use crate::error::{EditError, Result};
use crate::media::{ImageBuffer, ImageData};

/// Values the prompts are pre-filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptDefaults {
    pub kernel: KernelSize,
    pub thickness: LineThickness,
}

/// Local UI state for the workbench screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current image, absent until the first load or capture.
    buffer: Option<ImageBuffer>,
    /// What the canvas paints: the buffer, or a channel view of it.
    display: Option<ImageData>,
    prompt: Option<Prompt>,
    defaults: PromptDefaults,
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Prompt(msg) => self.handle_prompt_message(msg),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&ImageBuffer> {
        self.buffer.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.buffer.is_some()
    }

    #[must_use]
    pub fn display(&self) -> Option<&ImageData> {
        self.display.as_ref()
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::Open => Event::OpenFileDialog,
            ToolbarMessage::Capture => Event::StartCamera,
            ToolbarMessage::SaveAs => {
                if self.has_image() {
                    Event::SaveFileDialog
                } else {
                    Event::None
                }
            }
            ToolbarMessage::Grayscale => {
                if self.has_image() {
                    Self::event_from(self.apply_grayscale())
                } else {
                    Event::None
                }
            }
            ToolbarMessage::Blur => {
                if self.has_image() {
                    self.prompt = Some(Prompt::blur(self.defaults.kernel));
                }
                Event::None
            }
            ToolbarMessage::DrawLine => {
                if let Some(buffer) = &self.buffer {
                    let (width, height) = buffer.dimensions();
                    self.prompt = Some(Prompt::line(width, height, self.defaults.thickness));
                }
                Event::None
            }
            ToolbarMessage::ShowChannel => match &self.buffer {
                Some(buffer) if buffer.is_grayscale() => {
                    Event::Failed(EditError::ChannelOfGrayscale.into())
                }
                Some(_) => {
                    self.prompt = Some(Prompt::channel());
                    Event::None
                }
                None => Event::None,
            },
        }
    }

    fn handle_prompt_message(&mut self, message: PromptMessage) -> Event {
        match message {
            PromptMessage::FieldChanged(field, value) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.set_field(field, value);
                }
                Event::None
            }
            PromptMessage::ChannelSelected(channel) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.select_channel(channel);
                }
                Event::None
            }
            PromptMessage::Cancel => {
                self.prompt = None;
                Event::None
            }
            PromptMessage::Submit => {
                let Some(prompt) = self.prompt.take() else {
                    return Event::None;
                };
                let result = prompt
                    .parse()
                    .map_err(Into::into)
                    .and_then(|request| self.run(request));
                Self::event_from(result)
            }
        }
    }

    fn event_from(result: Result<(u32, u32)>) -> Event {
        match result {
            Ok((width, height)) => Event::Redrawn { width, height },
            Err(err) => Event::Failed(err),
        }
    }
}

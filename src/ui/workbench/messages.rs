// SPDX-License-Identifier: MPL-2.0
//! Workbench message/event types re-exported by the facade.

use super::prompt::Field;
use crate::domain::editing::Channel;
use crate::error::Error;

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMessage {
    Open,
    Capture,
    Blur,
    Grayscale,
    DrawLine,
    ShowChannel,
    SaveAs,
}

/// Interaction with the open prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMessage {
    FieldChanged(Field, String),
    ChannelSelected(Channel),
    Submit,
    Cancel,
}

/// Messages emitted directly by the workbench widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Prompt(PromptMessage),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<PromptMessage> for Message {
    fn from(message: PromptMessage) -> Self {
        Message::Prompt(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the user for an image to load.
    OpenFileDialog,
    /// Ask the user where to write the current buffer.
    SaveFileDialog,
    /// Switch to the live camera preview.
    StartCamera,
    /// The display surface was rebuilt; the window should fit these
    /// dimensions.
    Redrawn { width: u32, height: u32 },
    /// A handler rejected its input or failed. The buffer is unchanged.
    Failed(Error),
}

// SPDX-License-Identifier: MPL-2.0
//! Parameter prompts shown before the blur, line and channel handlers run.
//!
//! Fields hold raw text exactly as typed. Nothing is validated until the
//! prompt is submitted, so a half-typed value never raises an error.

use crate::domain::editing::{Channel, KernelSize, LineSegment, LineThickness, Point};
use crate::error::EditError;

/// Text fields of the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kernel,
    X1,
    Y1,
    X2,
    Y2,
    Thickness,
}

impl Field {
    /// Name reported in [`EditError::InvalidNumber`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Kernel => "kernel",
            Field::X1 => "x1",
            Field::Y1 => "y1",
            Field::X2 => "x2",
            Field::Y2 => "y2",
            Field::Thickness => "thickness",
        }
    }

    /// Fluent key of the field label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Field::Kernel => "prompt-blur-kernel",
            Field::X1 => "prompt-line-x1",
            Field::Y1 => "prompt-line-y1",
            Field::X2 => "prompt-line-x2",
            Field::Y2 => "prompt-line-y2",
            Field::Thickness => "prompt-line-thickness",
        }
    }
}

/// Raw text of the line prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineFields {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub thickness: String,
}

impl LineFields {
    /// Pre-fills the prompt with the main diagonal of a `width`×`height`
    /// image.
    #[must_use]
    pub fn diagonal(width: u32, height: u32, thickness: LineThickness) -> Self {
        Self {
            x1: "0".into(),
            y1: "0".into(),
            x2: width.saturating_sub(1).to_string(),
            y2: height.saturating_sub(1).to_string(),
            thickness: thickness.value().to_string(),
        }
    }

    /// Parses every field into a segment.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidNumber`] naming the first field that is not an
    /// integer, or [`EditError::InvalidThickness`] when the thickness is out
    /// of range.
    pub fn parse(&self) -> Result<LineSegment, EditError> {
        let start = Point::new(
            parse_int(&self.x1, Field::X1)?,
            parse_int(&self.y1, Field::Y1)?,
        );
        let end = Point::new(
            parse_int(&self.x2, Field::X2)?,
            parse_int(&self.y2, Field::Y2)?,
        );
        let thickness = LineThickness::try_new(parse_int(&self.thickness, Field::Thickness)?)?;
        Ok(LineSegment::new(start, end, thickness))
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::X1 => Some(&mut self.x1),
            Field::Y1 => Some(&mut self.y1),
            Field::X2 => Some(&mut self.x2),
            Field::Y2 => Some(&mut self.y2),
            Field::Thickness => Some(&mut self.thickness),
            Field::Kernel => None,
        }
    }
}

fn parse_int<T: std::str::FromStr>(input: &str, field: Field) -> Result<T, EditError> {
    input
        .trim()
        .parse()
        .map_err(|_| EditError::InvalidNumber {
            field: field.name(),
        })
}

/// The prompt currently open over the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Blur { kernel: String },
    Line(LineFields),
    Channel { selected: Channel },
}

/// A submitted prompt, parsed into handler parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Blur(KernelSize),
    Line(LineSegment),
    Channel(Channel),
}

impl Prompt {
    #[must_use]
    pub fn blur(default: KernelSize) -> Self {
        Prompt::Blur {
            kernel: default.value().to_string(),
        }
    }

    #[must_use]
    pub fn line(width: u32, height: u32, thickness: LineThickness) -> Self {
        Prompt::Line(LineFields::diagonal(width, height, thickness))
    }

    #[must_use]
    pub fn channel() -> Self {
        Prompt::Channel {
            selected: Channel::default(),
        }
    }

    /// Fluent key of the prompt title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Prompt::Blur { .. } => "prompt-blur-title",
            Prompt::Line(_) => "prompt-line-title",
            Prompt::Channel { .. } => "prompt-channel-title",
        }
    }

    /// Replaces the text of `field`. Fields the prompt does not have are
    /// ignored.
    pub fn set_field(&mut self, field: Field, value: String) {
        match (self, field) {
            (Prompt::Blur { kernel }, Field::Kernel) => *kernel = value,
            (Prompt::Line(fields), field) => {
                if let Some(slot) = fields.field_mut(field) {
                    *slot = value;
                }
            }
            _ => {}
        }
    }

    pub fn select_channel(&mut self, channel: Channel) {
        if let Prompt::Channel { selected } = self {
            *selected = channel;
        }
    }

    /// Validates the prompt input.
    pub fn parse(&self) -> Result<Request, EditError> {
        match self {
            Prompt::Blur { kernel } => KernelSize::parse(kernel).map(Request::Blur),
            Prompt::Line(fields) => fields.parse().map(Request::Line),
            Prompt::Channel { selected } => Ok(Request::Channel(*selected)),
        }
    }
}

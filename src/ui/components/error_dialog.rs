// SPDX-License-Identifier: MPL-2.0
//! Modal error dialog.
//!
//! Every failure of the application ends up here. The dialog shows:
//! - A localized title and message derived from the error's i18n key
//! - Optional collapsible technical details (paths, decoder messages)
//! - A single OK button; nothing else is clickable until it is pressed

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the dialog buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Dismiss,
    ToggleDetails,
}

/// What the parent should do after [`ErrorDialog::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Dismissed,
}

/// An error waiting to be acknowledged.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    error: Error,
    show_details: bool,
}

impl ErrorDialog {
    #[must_use]
    pub fn new(error: Error) -> Self {
        Self {
            error,
            show_details: false,
        }
    }

    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.show_details
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Dismiss => Event::Dismissed,
            Message::ToggleDetails => {
                self.show_details = !self.show_details;
                Event::None
            }
        }
    }

    /// Renders the dialog card. Wrap it with [`super::modal::modal`].
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = palette::ERROR_500;

        let title = Text::new(i18n.tr("error-dialog-title"))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message = Text::new(i18n.tr(self.error.i18n_key())).size(typography::BODY);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(title)
            .push(message);

        let mut buttons = Row::new().spacing(spacing::XS);

        if let Some(details_text) = self.error.details() {
            let toggle_label = if self.show_details {
                i18n.tr("error-details-hide")
            } else {
                i18n.tr("error-details-show")
            };
            buttons = buttons.push(
                button(Text::new(toggle_label).size(typography::CAPTION))
                    .style(button::text)
                    .on_press(Message::ToggleDetails),
            );

            if self.show_details {
                let details_body = Text::new(details_text)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });
                content = content.push(rule::horizontal(1)).push(details_body);
            }
        }

        let ok_button = button(Text::new(i18n.tr("button-ok")))
            .style(button::danger)
            .on_press(Message::Dismiss);
        let button_row = Container::new(buttons.push(ok_button))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right);

        Container::new(content.push(button_row))
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::accented_dialog(accent_color))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CameraError, EditError};

    #[test]
    fn dismiss_reports_dismissed() {
        let mut dialog = ErrorDialog::new(EditError::AlreadyGrayscale.into());
        assert_eq!(dialog.update(Message::Dismiss), Event::Dismissed);
    }

    #[test]
    fn toggle_details_flips_visibility() {
        let mut dialog =
            ErrorDialog::new(CameraError::DeviceUnavailable("/dev/video0".into()).into());
        assert!(!dialog.details_visible());
        assert_eq!(dialog.update(Message::ToggleDetails), Event::None);
        assert!(dialog.details_visible());
        dialog.update(Message::ToggleDetails);
        assert!(!dialog.details_visible());
    }

    #[test]
    fn view_renders_with_and_without_details() {
        let i18n = I18n::default();
        let _ = ErrorDialog::new(EditError::EvenKernelSize(4).into()).view(&i18n);
        let mut dialog = ErrorDialog::new(Error::Io("disk".into()));
        dialog.update(Message::ToggleDetails);
        let _ = dialog.view(&i18n);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast cards, stacked in the bottom-right corner above everything else.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// One card: an accent strip in the severity colour, the message and a
    /// close button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent();

        let strip = Container::new(Space::new())
            .width(Length::Fixed(border::WIDTH_MD * 2.0))
            .height(Length::Fixed(typography::BODY * 2.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let close = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(styles::button::ghost);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(strip)
            .push(
                Text::new(notification.text(i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// All visible toasts, newest at the bottom.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let column = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, notification| {
                column.push(Self::view(notification, i18n))
            })
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_border_takes_the_accent() {
        let style = card_style(&Theme::Light, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_empty_and_filled() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager, &i18n);

        manager.push(Notification::success("notification-image-saved").with_arg("path", "a.png"));
        manager.push(Notification::warning("notification-state-read-error"));
        let _ = Toast::view_overlay(&manager, &i18n);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Workbench view: toolbar, canvas and the prompt overlay.

use crate::app::config::TOOLBAR_HEIGHT;
use crate::domain::editing::Channel;
use crate::ui::components::modal::modal;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, radio, text, text_input, Column, Container, Row, Text,
};
use iced::{alignment, Alignment, ContentFit, Element, Length, Theme};

use super::prompt::{Field, LineFields, Prompt};
use super::{Message, PromptMessage, State, ToolbarMessage, ViewContext};

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .push(toolbar(state.has_image(), &ctx))
        .push(canvas(state, &ctx));

    let base = container(content).width(Length::Fill).height(Length::Fill);

    match state.prompt() {
        Some(prompt) => modal(
            base,
            prompt_card(prompt, &ctx),
            Some(Message::Prompt(PromptMessage::Cancel)),
        ),
        None => base.into(),
    }
}

fn toolbar<'a>(has_image: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tool = |key: &str, message: ToolbarMessage, enabled: bool| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .on_press_maybe(enabled.then_some(Message::Toolbar(message)))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(tool("button-open", ToolbarMessage::Open, true))
        .push(tool("button-camera", ToolbarMessage::Capture, true))
        .push(tool("button-blur", ToolbarMessage::Blur, has_image))
        .push(tool("button-grayscale", ToolbarMessage::Grayscale, has_image))
        .push(tool("button-line", ToolbarMessage::DrawLine, has_image))
        .push(tool("button-channel", ToolbarMessage::ShowChannel, has_image))
        .push(tool("button-save", ToolbarMessage::SaveAs, has_image));

    container(row)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(TOOLBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}

fn canvas<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match state.display() {
        Some(data) => center(
            image(data.handle.clone())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .content_fit(ContentFit::None),
        )
        .into(),
        None => center(
            Text::new(ctx.i18n.tr("workbench-empty"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        )
        .into(),
    }
}

fn prompt_card<'a>(prompt: &'a Prompt, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(prompt.title_key())).size(typography::TITLE_SM);

    let body: Element<'a, Message> = match prompt {
        Prompt::Blur { kernel } => labelled_input(Field::Kernel, kernel, ctx),
        Prompt::Line(fields) => line_inputs(fields, ctx),
        Prompt::Channel { selected } => channel_choices(*selected, ctx),
    };

    let cancel = button(Text::new(ctx.i18n.tr("button-cancel")))
        .style(button::secondary)
        .on_press(Message::Prompt(PromptMessage::Cancel));
    let ok = button(Text::new(ctx.i18n.tr("button-ok")))
        .style(button::primary)
        .on_press(Message::Prompt(PromptMessage::Submit));
    let buttons = Container::new(Row::new().spacing(spacing::XS).push(cancel).push(ok))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(body)
            .push(buttons),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog)
    .into()
}

fn labelled_input<'a>(
    field: Field,
    value: &'a str,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let label = ctx.i18n.tr(field.i18n_key());
    let input = text_input("", value)
        .on_input(move |text| Message::Prompt(PromptMessage::FieldChanged(field, text)))
        .on_submit(Message::Prompt(PromptMessage::Submit))
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(input)
        .into()
}

fn line_inputs<'a>(fields: &'a LineFields, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(labelled_input(Field::X1, &fields.x1, ctx))
        .push(labelled_input(Field::Y1, &fields.y1, ctx))
        .push(labelled_input(Field::X2, &fields.x2, ctx))
        .push(labelled_input(Field::Y2, &fields.y2, ctx))
        .push(labelled_input(Field::Thickness, &fields.thickness, ctx))
        .into()
}

fn channel_choices<'a>(selected: Channel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Channel::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &channel| {
            column.push(
                radio(
                    ctx.i18n.tr(channel.i18n_key()),
                    channel,
                    Some(selected),
                    |choice| Message::Prompt(PromptMessage::ChannelSelected(choice)),
                )
                .size(typography::BODY),
            )
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Live camera preview.
//!
//! While this screen is shown a capture worker streams frames into the
//! window. `Space` keeps the last frame shown and `Escape` discards it.
//! Leaving the screen drops the subscription, which stops the worker and
//! releases the device.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{CameraCapture, CameraEvent, CameraFrame, CameraSource, ImageBuffer, ImageData};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::futures::SinkExt;
use iced::widget::{center, container, image, text, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Subscription, Theme};

/// Subscription ID for a capture session.
/// Each preview gets a unique ID so reopening the camera restarts the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraSessionId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    Camera(CameraEvent),
    Confirm,
    Cancel,
}

/// What the parent should do after [`State::update`].
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user kept this frame.
    Captured(ImageBuffer),
    /// The user left the preview without capturing.
    Cancelled,
    /// The device could not be opened or stopped delivering frames.
    Failed(Error),
}

#[derive(Debug, Clone)]
pub struct State {
    session_id: u64,
    source: CameraSource,
    latest: Option<CameraFrame>,
    display: Option<ImageData>,
}

impl State {
    #[must_use]
    pub fn new(source: CameraSource, session_id: u64) -> Self {
        Self {
            session_id,
            source,
            latest: None,
            display: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Camera(CameraEvent::Opened { width, height }) => {
                log::info!("camera streaming at {width}x{height}");
                Event::None
            }
            Message::Camera(CameraEvent::Frame(frame)) => {
                self.display = Some(frame.to_image_data());
                self.latest = Some(frame);
                Event::None
            }
            Message::Camera(CameraEvent::Failed(err)) => Event::Failed(err.into()),
            Message::Confirm => match &self.latest {
                Some(frame) => match frame.to_buffer() {
                    Ok(buffer) => Event::Captured(buffer),
                    Err(err) => Event::Failed(err.into()),
                },
                None => {
                    log::debug!("capture requested before the first frame");
                    Event::None
                }
            },
            Message::Cancel => Event::Cancelled,
        }
    }

    /// Streams frames from the configured device while subscribed.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(
            (CameraSessionId(self.session_id), self.source.clone()),
            |(_, source)| {
                let source = source.clone();
                iced::stream::channel(2, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                    let mut capture = CameraCapture::start(source);
                    while let Some(event) = capture.recv_event().await {
                        let failed = matches!(event, CameraEvent::Failed(_));
                        if output.send(Message::Camera(event)).await.is_err() || failed {
                            break;
                        }
                    }
                })
            },
        )
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let frame: Element<'a, Message> = match &self.display {
            Some(data) => center(
                image(data.handle.clone())
                    .width(Length::Shrink)
                    .height(Length::Shrink)
                    .content_fit(ContentFit::ScaleDown),
            )
            .into(),
            None => center(
                Text::new(i18n.tr("camera-waiting"))
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    }),
            )
            .into(),
        };

        let hint = Container::new(
            Container::new(Text::new(i18n.tr("camera-hint")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::hint),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom);

        container(Stack::new().push(frame).push(hint))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

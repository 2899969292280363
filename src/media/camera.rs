// SPDX-License-Identifier: MPL-2.0
//! Camera capture through FFmpeg input devices.
//!
//! A [`CameraCapture`] owns a blocking worker that opens the device, decodes
//! frames continuously, and converts them to RGB24. The worker stops as soon
//! as the receiving side is dropped, which releases the device.

use crate::error::CameraError;
use crate::media::buffer::ImageBuffer;
use crate::media::ImageData;
use std::sync::{Arc, Once};
use tokio::sync::mpsc;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times. The FFmpeg log level is lowered to ERROR so
/// device probing does not flood stderr.
pub fn init_ffmpeg() -> Result<(), CameraError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(CameraError::DeviceUnavailable(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Which FFmpeg input device to open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraSource {
    /// FFmpeg input format name, e.g. `v4l2`, `avfoundation` or `dshow`.
    pub input_format: String,
    /// Device URL understood by that format.
    pub device: String,
}

impl CameraSource {
    /// The platform's first camera.
    #[must_use]
    pub fn platform_default() -> Self {
        let (input_format, device) = if cfg!(target_os = "macos") {
            ("avfoundation", "0")
        } else if cfg!(target_os = "windows") {
            ("dshow", "video=0")
        } else {
            ("v4l2", "/dev/video0")
        };
        Self {
            input_format: input_format.to_string(),
            device: device.to_string(),
        }
    }
}

impl Default for CameraSource {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// A decoded camera frame, packed RGB24 without row padding.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub rgb_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl CameraFrame {
    /// Converts the frame for display.
    #[must_use]
    pub fn to_image_data(&self) -> ImageData {
        ImageData::from_rgb(self.width, self.height, &self.rgb_data)
    }

    /// Copies the frame into a working buffer.
    ///
    /// # Errors
    ///
    /// [`CameraError::FrameReadFailed`] if the sample count does not match
    /// the frame size.
    pub fn to_buffer(&self) -> Result<ImageBuffer, CameraError> {
        ImageBuffer::from_rgb(self.width, self.height, self.rgb_data.to_vec()).ok_or_else(|| {
            CameraError::FrameReadFailed(format!(
                "frame holds {} bytes, expected {}x{}x3",
                self.rgb_data.len(),
                self.width,
                self.height
            ))
        })
    }
}

/// Events emitted by the capture worker.
#[derive(Debug, Clone)]
pub enum CameraEvent {
    /// The device is open and streaming at the given size.
    Opened { width: u32, height: u32 },

    /// A new frame is ready for display.
    Frame(CameraFrame),

    /// Capture stopped because of an error. No further events follow.
    Failed(CameraError),
}

/// Handle to a running capture worker.
pub struct CameraCapture {
    /// Bounded so a slow UI never queues more than a couple of frames.
    event_rx: mpsc::Receiver<CameraEvent>,
}

impl CameraCapture {
    /// Spawns the capture worker on Tokio's blocking pool.
    #[must_use]
    pub fn start(source: CameraSource) -> Self {
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send, so everything happens on one thread
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::capture_loop_blocking(&source, &event_tx) {
                log::warn!("camera capture stopped: {e}");
                let _ = event_tx.blocking_send(CameraEvent::Failed(e));
            }
        });

        Self { event_rx }
    }

    /// Receives the next event.
    ///
    /// Returns `None` once the worker has terminated.
    pub async fn recv_event(&mut self) -> Option<CameraEvent> {
        self.event_rx.recv().await
    }

    fn capture_loop_blocking(
        source: &CameraSource,
        event_tx: &mpsc::Sender<CameraEvent>,
    ) -> Result<(), CameraError> {
        init_ffmpeg()?;

        let format = ffmpeg_next::device::input::video()
            .find(|format| {
                format
                    .name()
                    .split(',')
                    .any(|name| name == source.input_format)
            })
            .ok_or_else(|| {
                CameraError::DeviceUnavailable(format!(
                    "input format `{}` is not available",
                    source.input_format
                ))
            })?;

        log::info!(
            "opening camera {} via {}",
            source.device,
            source.input_format
        );
        let mut ictx = ffmpeg_next::format::open_with(
            &source.device,
            &ffmpeg_next::format::Format::Input(format),
            ffmpeg_next::Dictionary::new(),
        )
        .map_err(|e| CameraError::DeviceUnavailable(format!("{}: {e}", source.device)))?
        .input();

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| CameraError::DeviceUnavailable("no video stream".to_string()))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| CameraError::DeviceUnavailable(format!("codec context: {e}")))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| CameraError::DeviceUnavailable(format!("video decoder: {e}")))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(CameraError::DeviceUnavailable(format!(
                "invalid frame size {width}x{height}"
            )));
        }

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| CameraError::DeviceUnavailable(format!("scaler: {e}")))?;

        if event_tx
            .blocking_send(CameraEvent::Opened { width, height })
            .is_err()
        {
            return Ok(());
        }

        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }

            decoder
                .send_packet(&packet)
                .map_err(|e| CameraError::FrameReadFailed(format!("packet: {e}")))?;

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                scaler
                    .run(&decoded_frame, &mut rgb_frame)
                    .map_err(|e| CameraError::FrameReadFailed(format!("scaling: {e}")))?;

                let frame = CameraFrame {
                    rgb_data: Arc::new(Self::extract_rgb_data(&rgb_frame)),
                    width,
                    height,
                };

                if event_tx.blocking_send(CameraEvent::Frame(frame)).is_err() {
                    log::debug!("camera preview closed, releasing {}", source.device);
                    return Ok(());
                }
            }
        }

        Err(CameraError::FrameReadFailed(
            "device stopped delivering frames".to_string(),
        ))
    }

    /// Copies the first plane row by row, dropping the stride padding.
    fn extract_rgb_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let row_bytes = frame.width() as usize * 3;
        let stride = frame.stride(0);
        pack_rows(frame.data(0), stride, row_bytes, frame.height() as usize)
    }
}

fn pack_rows(data: &[u8], stride: usize, row_bytes: usize, rows: usize) -> Vec<u8> {
    let mut packed = Vec::with_capacity(row_bytes * rows);
    for row in data.chunks(stride.max(1)).take(rows) {
        packed.extend_from_slice(&row[..row_bytes.min(row.len())]);
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_rows_drops_stride_padding() {
        let data = [1, 2, 3, 0, 4, 5, 6, 0];
        assert_eq!(pack_rows(&data, 4, 3, 2), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn pack_rows_without_padding_is_a_copy() {
        let data = [9, 8, 7, 6, 5, 4];
        assert_eq!(pack_rows(&data, 3, 3, 2), data.to_vec());
    }

    #[test]
    fn frame_converts_to_buffer_and_display_data() {
        let frame = CameraFrame {
            rgb_data: Arc::new(vec![255, 0, 0, 0, 0, 255]),
            width: 2,
            height: 1,
        };
        let buffer = frame.to_buffer().expect("sample count matches");
        assert_eq!(buffer.dimensions(), (2, 1));
        assert!(!buffer.is_grayscale());
        assert_eq!(
            frame.to_image_data().handle_pixels(),
            &[255, 0, 0, 255, 0, 0, 255, 255]
        );
    }

    #[test]
    fn truncated_frame_is_a_read_failure() {
        let frame = CameraFrame {
            rgb_data: Arc::new(vec![0; 5]),
            width: 2,
            height: 1,
        };
        assert!(matches!(
            frame.to_buffer(),
            Err(CameraError::FrameReadFailed(_))
        ));
    }

    #[test]
    fn platform_default_names_a_device() {
        let source = CameraSource::platform_default();
        assert!(!source.input_format.is_empty());
        assert!(!source.device.is_empty());
    }

    #[test]
    fn unknown_input_format_is_reported_as_unavailable() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        runtime.block_on(async {
            let mut capture = CameraCapture::start(CameraSource {
                input_format: "no-such-input-format".to_string(),
                device: "nowhere".to_string(),
            });
            match capture.recv_event().await {
                Some(CameraEvent::Failed(CameraError::DeviceUnavailable(_))) => {}
                other => panic!("expected DeviceUnavailable, got {other:?}"),
            }
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Pixel operations applied by the editing handlers.
//!
//! Every function here is pure with respect to its inputs except
//! [`draw_line`], which paints into the buffer in place. Rejections are
//! reported before any pixel is touched.

use crate::domain::editing::{Channel, KernelSize, LineSegment};
use crate::error::EditError;
use crate::media::buffer::ImageBuffer;
use image_rs::{GrayImage, Luma, Rgb};
use imageproc::definitions::Image;
use imageproc::drawing::{draw_line_segment_mut, Canvas};

/// Colour of drawn lines on RGB buffers.
pub const LINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Intensity of drawn lines on grayscale buffers. A single-channel target
/// only receives the first component of the colour in BGR order, which is 0.
pub const LINE_INTENSITY: Luma<u8> = Luma([0]);

// ==========================================================================
// Gaussian blur
// ==========================================================================

/// Fixed kernels used for the smallest sizes, identical to the binomial
/// tables OpenCV uses when sigma is derived from the size.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
    ],
];

/// Returns the normalized 1D Gaussian weights for `size`.
#[must_use]
pub fn gaussian_kernel(size: KernelSize) -> Vec<f32> {
    let k = size.value() as usize;
    if let Some(fixed) = SMALL_KERNELS.get(k / 2) {
        return fixed.to_vec();
    }

    let sigma = f64::from(size.sigma());
    let radius = f64::from(size.radius());
    let scale = -0.5 / (sigma * sigma);
    let raw: Vec<f64> = (0..k)
        .map(|i| {
            let x = i as f64 - radius;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.iter().map(|w| (w / sum) as f32).collect()
}

/// Blurs the buffer with a square Gaussian kernel. Pixels beyond the border
/// replicate the nearest edge pixel.
#[must_use]
pub fn gaussian_blur(buffer: &ImageBuffer, size: KernelSize) -> ImageBuffer {
    let kernel = gaussian_kernel(size);
    match buffer {
        ImageBuffer::Gray(img) => {
            ImageBuffer::Gray(imageproc::filter::separable_filter_equal(img, &kernel))
        }
        ImageBuffer::Color(img) => {
            ImageBuffer::Color(imageproc::filter::separable_filter_equal(img, &kernel))
        }
    }
}

// ==========================================================================
// Grayscale
// ==========================================================================

/// Converts an RGB buffer to a single-channel one.
///
/// # Errors
///
/// [`EditError::AlreadyGrayscale`] if the buffer has one channel.
pub fn to_grayscale(buffer: &ImageBuffer) -> Result<ImageBuffer, EditError> {
    match buffer {
        ImageBuffer::Gray(_) => Err(EditError::AlreadyGrayscale),
        ImageBuffer::Color(img) => Ok(ImageBuffer::Gray(image_rs::imageops::grayscale(img))),
    }
}

// ==========================================================================
// Line drawing
// ==========================================================================

/// Paints `segment` into the buffer using [`LINE_COLOR`] or
/// [`LINE_INTENSITY`]. End points may lie outside the image.
pub fn draw_line(buffer: &mut ImageBuffer, segment: &LineSegment) {
    match buffer {
        ImageBuffer::Gray(img) => stroke(img, segment, LINE_INTENSITY),
        ImageBuffer::Color(img) => stroke(img, segment, LINE_COLOR),
    }
}

type Coord = (f64, f64);

fn stroke<C: Canvas>(canvas: &mut C, segment: &LineSegment, color: C::Pixel) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let thickness = segment.thickness.value();
    let half = f64::from(thickness) / 2.0;
    let margin = half + 1.0;
    let start = (f64::from(segment.start.x), f64::from(segment.start.y));
    let end = (f64::from(segment.end.x), f64::from(segment.end.y));
    let lower = (-margin, -margin);
    let upper = (f64::from(width) - 1.0 + margin, f64::from(height) - 1.0 + margin);

    let Some((a, b)) = clip_segment(start, end, lower, upper) else {
        return;
    };

    if thickness == 1 {
        draw_line_segment_mut(canvas, to_f32(a), to_f32(b), color);
        return;
    }

    fill_capsule(canvas, a, b, half, color);
}

/// Paints every pixel within `half` of the segment `a`..`b`, which gives
/// round caps. Only the part of the bounding box inside the canvas is
/// visited, so the cost never exceeds one pass over the image.
fn fill_capsule<C: Canvas>(canvas: &mut C, a: Coord, b: Coord, half: f64, color: C::Pixel) {
    let (width, height) = canvas.dimensions();
    let Some((x0, x1)) = pixel_span(a.0.min(b.0) - half, a.0.max(b.0) + half, width) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(a.1.min(b.1) - half, a.1.max(b.1) + half, height) else {
        return;
    };

    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let half_sq = half * half;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let (px, py) = (f64::from(x) - a.0, f64::from(y) - a.1);
            let t = if length_sq > 0.0 {
                ((px * dx + py * dy) / length_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if ex * ex + ey * ey <= half_sq {
                canvas.draw_pixel(x, y, color);
            }
        }
    }
}

/// Integer pixel range covering `lo..=hi`, clamped to `0..len`.
fn pixel_span(lo: f64, hi: f64, len: u32) -> Option<(u32, u32)> {
    let last = f64::from(len) - 1.0;
    let lo = lo.floor().max(0.0);
    let hi = hi.ceil().min(last);
    if lo > hi {
        return None;
    }
    // Both ends lie in 0..len after clamping.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some((lo as u32, hi as u32))
}

/// Liang-Barsky clipping of `a`..`b` against the rectangle `lower`..=`upper`.
fn clip_segment(a: Coord, b: Coord, lower: Coord, upper: Coord) -> Option<(Coord, Coord)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, a.0 - lower.0),
        (dx, upper.0 - a.0),
        (-dy, a.1 - lower.1),
        (dy, upper.1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(p: Coord) -> (f32, f32) {
    (p.0 as f32, p.1 as f32)
}


// ==========================================================================
// Channel extraction
// ==========================================================================

/// Copies one colour component into a single-channel image.
///
/// # Errors
///
/// [`EditError::ChannelOfGrayscale`] if the buffer has one channel.
pub fn extract_channel(buffer: &ImageBuffer, channel: Channel) -> Result<GrayImage, EditError> {
    match buffer {
        ImageBuffer::Gray(_) => Err(EditError::ChannelOfGrayscale),
        ImageBuffer::Color(img) => Ok(component(img, channel.index())),
    }
}

fn component(img: &Image<Rgb<u8>>, index: usize) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y).0[index]])
    })
}
